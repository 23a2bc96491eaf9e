pub mod client;

use std::thread;

use crate::config::ApiConfig;
use crate::models::ReferenceTimes;

pub use client::{FetchError, TimingsClient};

pub const CITY: &str = "Jamshedpur";
pub const COUNTRY: &str = "India";
/// Aladhan calculation method 2, Islamic Society of North America.
pub const METHOD: u8 = 2;

/// Fetch today's timings for the fixed city.
pub fn fetch_reference_times(config: &ApiConfig) -> Result<ReferenceTimes, FetchError> {
    log::info!("Fetching prayer times for {}, {} (method {})", CITY, COUNTRY, METHOD);
    TimingsClient::new(config)?.fetch_reference_times(CITY, COUNTRY, METHOD)
}

/// Run one fetch on a background thread and hand the result to `on_done`.
/// Nothing waits on the thread; if the receiver is gone by the time it
/// finishes the result is simply dropped.
pub fn spawn_fetch<F>(config: ApiConfig, on_done: F)
where
    F: FnOnce(Result<ReferenceTimes, FetchError>) + Send + 'static,
{
    thread::spawn(move || on_done(fetch_reference_times(&config)));
}
