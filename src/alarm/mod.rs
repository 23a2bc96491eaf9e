pub mod engine;
pub mod player;

pub use engine::{AlarmEngine, AlarmState};
pub use player::{Player, ProcessPlayer};
