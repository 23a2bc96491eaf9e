use chrono::{Local, NaiveTime};

use crate::utils::format::{format_12h, format_24h};

/// Source of the current wall-clock time of day.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// Host local time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// One reading of the clock in both of its renderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    /// "HH:MM:SS AM|PM", shown to the user.
    pub display: String,
    /// "HH:MM:SS", matched against target times.
    pub comparison: String,
}

impl ClockReading {
    pub fn at(t: NaiveTime) -> Self {
        Self {
            display: format_12h(t),
            comparison: format_24h(t),
        }
    }
}

#[cfg(test)]
pub struct FixedClock(pub NaiveTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
