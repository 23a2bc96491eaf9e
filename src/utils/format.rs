use chrono::{NaiveTime, Timelike};

/// Format a time as "HH:MM:SS AM|PM", with midnight and noon shown as 12.
pub fn format_12h(t: NaiveTime) -> String {
    let (is_pm, hour) = t.hour12();
    format!(
        "{:02}:{:02}:{:02} {}",
        hour,
        t.minute(),
        t.second(),
        if is_pm { "PM" } else { "AM" }
    )
}

/// Format a time as "HH:MM:SS" on a 24-hour clock.
pub fn format_24h(t: NaiveTime) -> String {
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}
