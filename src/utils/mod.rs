pub mod clock;
pub mod format;
