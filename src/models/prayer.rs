use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The five daily prayers, in the order they are listed and matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    pub const ALL: [PrayerName; 5] = [
        PrayerName::Fajr,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    /// Display name, also the key used by the timings API.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrayerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerName::Dhuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("expected HH:MM, got '{0}'")]
    Format(String),
    #[error("hour {0} is out of range (00-23)")]
    Hour(u32),
    #[error("minute {0} is out of range (00-59)")]
    Minute(u32),
}

/// A user-pinned time of day. Seconds are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetTime {
    hour: u32,
    minute: u32,
}

impl TargetTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeParseError> {
        if hour > 23 {
            return Err(TimeParseError::Hour(hour));
        }
        if minute > 59 {
            return Err(TimeParseError::Minute(minute));
        }
        Ok(Self { hour, minute })
    }

    /// `HH:MM:00`, comparable against the clock's 24-hour reading.
    pub fn comparison_string(&self) -> String {
        format!("{:02}:{:02}:00", self.hour, self.minute)
    }
}

impl fmt::Display for TargetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TargetTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let format_err = || TimeParseError::Format(trimmed.to_string());

        let (h, m) = trimmed.split_once(':').ok_or_else(format_err)?;
        let well_formed = (1..=2).contains(&h.len())
            && m.len() == 2
            && h.chars().all(|c| c.is_ascii_digit())
            && m.chars().all(|c| c.is_ascii_digit());
        if !well_formed {
            return Err(format_err());
        }

        let hour = h.parse::<u32>().map_err(|_| format_err())?;
        let minute = m.parse::<u32>().map_err(|_| format_err())?;
        TargetTime::new(hour, minute)
    }
}
