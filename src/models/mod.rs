pub mod prayer;
pub mod schedule;

pub use prayer::{PrayerName, TargetTime};
pub use schedule::{PrayerSchedule, ReferenceTimes, NOT_SET};
