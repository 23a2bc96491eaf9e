use std::collections::HashMap;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::models::{PrayerName, ReferenceTimes};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("timings service returned {0}")]
    Status(StatusCode),
    #[error("malformed timings response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("timings response has no entry for {0}")]
    MissingTiming(PrayerName),
}

#[derive(Debug, Deserialize)]
struct TimingsResponse {
    data: TimingsData,
}

#[derive(Debug, Deserialize)]
struct TimingsData {
    timings: HashMap<String, String>,
}

pub struct TimingsClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl TimingsClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Single GET to `timingsByCity`. No retry.
    pub fn fetch_reference_times(
        &self,
        city: &str,
        country: &str,
        method: u8,
    ) -> Result<ReferenceTimes, FetchError> {
        let url = format!("{}/timingsByCity", self.base_url);
        let method = method.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[("city", city), ("country", country), ("method", method.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text()?;
        parse_timings(&body)
    }
}

/// Decode a `timingsByCity` body into the five prayers' reference times.
pub fn parse_timings(body: &str) -> Result<ReferenceTimes, FetchError> {
    let response: TimingsResponse = serde_json::from_str(body)?;
    let mut timings = response.data.timings;

    let mut times: [String; 5] = Default::default();
    for prayer in PrayerName::ALL {
        let time = timings
            .remove(prayer.as_str())
            .ok_or(FetchError::MissingTiming(prayer))?;
        times[prayer.index()] = time.trim().to_string();
    }
    Ok(ReferenceTimes::new(times))
}
