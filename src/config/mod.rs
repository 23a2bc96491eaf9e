pub mod settings;

pub use settings::{AlarmConfig, ApiConfig, AppConfig};
