use crate::models::prayer::{PrayerName, TargetTime};

pub const NOT_SET: &str = "Not Set";

/// Reference timings as published by the remote service, one `HH:MM`
/// string per prayer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTimes {
    times: [String; 5],
}

impl ReferenceTimes {
    pub fn new(times: [String; 5]) -> Self {
        Self { times }
    }

    pub fn get(&self, prayer: PrayerName) -> &str {
        &self.times[prayer.index()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrayerEntry {
    pub target: Option<TargetTime>,
    pub reference: Option<String>,
}

/// Per-session schedule: user targets plus fetched reference times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrayerSchedule {
    entries: [PrayerEntry; 5],
}

impl PrayerSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, prayer: PrayerName) -> &PrayerEntry {
        &self.entries[prayer.index()]
    }

    pub fn target(&self, prayer: PrayerName) -> Option<TargetTime> {
        self.entry(prayer).target
    }

    pub fn set_target(&mut self, prayer: PrayerName, time: TargetTime) {
        self.entries[prayer.index()].target = Some(time);
    }

    pub fn clear_target(&mut self, prayer: PrayerName) {
        self.entries[prayer.index()].target = None;
    }

    pub fn reference(&self, prayer: PrayerName) -> Option<&str> {
        self.entry(prayer).reference.as_deref()
    }

    pub fn reference_display(&self, prayer: PrayerName) -> &str {
        self.reference(prayer).unwrap_or(NOT_SET)
    }

    pub fn has_reference_times(&self) -> bool {
        self.entries.iter().any(|e| e.reference.is_some())
    }

    /// Reference times are written once. Returns false if they were
    /// already populated and `times` was ignored.
    pub fn merge_reference_times(&mut self, times: &ReferenceTimes) -> bool {
        if self.has_reference_times() {
            return false;
        }
        for prayer in PrayerName::ALL {
            self.entries[prayer.index()].reference = Some(times.get(prayer).to_string());
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrayerName, &PrayerEntry)> {
        PrayerName::ALL.into_iter().map(|p| (p, self.entry(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_times() -> ReferenceTimes {
        ReferenceTimes::new(
            ["04:21", "11:48", "15:12", "18:09", "19:26"].map(String::from),
        )
    }

    #[test]
    fn fresh_schedule_shows_not_set() {
        let schedule = PrayerSchedule::new();
        for (prayer, entry) in schedule.iter() {
            assert_eq!(entry.target, None);
            assert_eq!(schedule.reference_display(prayer), NOT_SET);
        }
        assert!(!schedule.has_reference_times());
    }

    #[test]
    fn targets_are_overwritten_and_cleared() {
        let mut schedule = PrayerSchedule::new();
        schedule.set_target(PrayerName::Asr, TargetTime::new(15, 30).unwrap());
        schedule.set_target(PrayerName::Asr, TargetTime::new(15, 45).unwrap());
        assert_eq!(
            schedule.target(PrayerName::Asr),
            Some(TargetTime::new(15, 45).unwrap())
        );
        assert_eq!(schedule.target(PrayerName::Fajr), None);

        schedule.clear_target(PrayerName::Asr);
        assert_eq!(schedule.target(PrayerName::Asr), None);
    }

    #[test]
    fn reference_times_are_set_once() {
        let mut schedule = PrayerSchedule::new();
        assert!(schedule.merge_reference_times(&sample_times()));
        assert_eq!(schedule.reference_display(PrayerName::Isha), "19:26");

        let later = ReferenceTimes::new(["00:00"; 5].map(String::from));
        assert!(!schedule.merge_reference_times(&later));
        assert_eq!(schedule.reference(PrayerName::Fajr), Some("04:21"));
    }

    #[test]
    fn merging_reference_times_keeps_targets() {
        let mut schedule = PrayerSchedule::new();
        let target = TargetTime::new(4, 30).unwrap();
        schedule.set_target(PrayerName::Fajr, target);
        schedule.merge_reference_times(&sample_times());
        assert_eq!(schedule.target(PrayerName::Fajr), Some(target));
    }
}
