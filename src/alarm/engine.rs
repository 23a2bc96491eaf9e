use crate::alarm::player::Player;
use crate::models::{PrayerName, PrayerSchedule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmState {
    Idle,
    Active(PrayerName),
}

impl AlarmState {
    pub fn is_active(&self) -> bool {
        matches!(self, AlarmState::Active(_))
    }
}

/// First prayer, in declaration order, whose target equals `comparison`.
pub fn find_match(schedule: &PrayerSchedule, comparison: &str) -> Option<PrayerName> {
    schedule
        .iter()
        .filter_map(|(prayer, entry)| entry.target.map(|t| (prayer, t)))
        .find(|(_, target)| target.comparison_string() == comparison)
        .map(|(prayer, _)| prayer)
}

/// Alarm state machine plus the playback handle it drives.
///
/// State is recomputed from scratch on every evaluated tick. A dismissed
/// alarm therefore comes back if the next tick still matches; the
/// notification text, once set, stays until it is dismissed.
pub struct AlarmEngine {
    state: AlarmState,
    enabled: bool,
    notification: Option<String>,
    player: Box<dyn Player>,
}

impl AlarmEngine {
    pub fn new(player: Box<dyn Player>) -> Self {
        Self {
            state: AlarmState::Idle,
            enabled: true,
            notification: None,
            player,
        }
    }

    pub fn state(&self) -> AlarmState {
        self.state
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    pub fn is_playing(&mut self) -> bool {
        self.player.is_playing()
    }

    pub fn evaluate(&mut self, schedule: &PrayerSchedule, comparison: &str) -> AlarmState {
        if !self.enabled {
            return self.state;
        }
        match find_match(schedule, comparison) {
            Some(prayer) => {
                self.state = AlarmState::Active(prayer);
                self.trigger(prayer);
            }
            None => self.state = AlarmState::Idle,
        }
        self.state
    }

    fn trigger(&mut self, prayer: PrayerName) {
        log::info!("Alarm for {}", prayer);
        self.player.stop();
        if let Err(e) = self.player.play() {
            log::warn!("Alarm playback failed: {:#}", e);
        }
        self.notification = Some(format!("It's time for {}", prayer));
    }

    pub fn dismiss(&mut self) {
        if self.state.is_active() || self.notification.is_some() {
            log::info!("Alarm dismissed");
        }
        self.player.stop();
        self.notification = None;
        self.state = AlarmState::Idle;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.dismiss();
        }
    }

    /// Returns the new setting.
    pub fn toggle_enabled(&mut self) -> bool {
        self.set_enabled(!self.enabled);
        log::info!("Alarms {}", if self.enabled { "enabled" } else { "disabled" });
        self.enabled
    }
}
