use anyhow::{Context, Result};
use chrono::Local;

use crate::config::AppConfig;
use crate::models::{PrayerName, PrayerSchedule};
use crate::timings::{self, CITY, COUNTRY};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(config: &AppConfig) -> Result<()> {
    let today_str = Local::now().date_naive().format("%Y-%m-%d").to_string();

    let mut schedule = PrayerSchedule::new();
    match timings::fetch_reference_times(&config.api) {
        Ok(times) => {
            schedule.merge_reference_times(&times);
        }
        Err(e) => log::error!("Error fetching prayer times: {}", e),
    }

    println!();
    println_colored!(GOLD, "  Prayer Times — {}, {} ({})", CITY, COUNTRY, today_str);
    println!();

    for prayer in PrayerName::ALL {
        let time = schedule.reference_display(prayer);
        if schedule.reference(prayer).is_some() {
            println_colored!(BOLD, "  {:<10}  {}", prayer.as_str(), time);
        } else {
            println_colored!(DIM, "  {:<10}  {}", prayer.as_str(), time);
        }
    }

    if !schedule.has_reference_times() {
        println!();
        println_colored!(AMBER, "  Could not reach the timings service");
    }
    println!();
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig) -> Result<()> {
    let path = AppConfig::config_path()?;
    let status = if path.exists() { "" } else { " (not created, using defaults)" };
    println_colored!(GOLD, "# {}{}", path.display(), status);
    println_colored!(DIM, "# log: {}", AppConfig::log_path()?.display());
    println_colored!(DIM, "# alarm sound: {}", config.sound_file()?.display());
    println!();
    let content = toml::to_string_pretty(config).context("Serializing config")?;
    print!("{}", content);
    Ok(())
}
