/// Core type definitions for the inauspicious-period service
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use std::fmt;

use crate::error::{KalamError, Result};

/// Literal date token understood by the sunrise lookup as "the current day"
pub const TODAY: &str = "today";

/// Geographic position used for the sunrise/sunset lookup (no range checks)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }
}

/// Which calendar day to look up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSelector {
    Today,
    Date(String),
}

impl DateSelector {
    pub fn parse(raw: &str) -> Self {
        if raw == TODAY {
            DateSelector::Today
        } else {
            DateSelector::Date(raw.to_string())
        }
    }
    
    /// Value sent verbatim as the upstream `date` parameter
    pub fn as_str(&self) -> &str {
        match self {
            DateSelector::Today => TODAY,
            DateSelector::Date(date) => date,
        }
    }
}

impl Default for DateSelector {
    fn default() -> Self {
        DateSelector::Today
    }
}

/// Sunrise and sunset as absolute instants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

/// A labelled local-time window
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodWindow {
    pub label: &'static str,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl PeriodWindow {
    /// `"<start> to <end>"` in 12-hour clock form
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PeriodWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            crate::time::format_clock(&self.start),
            crate::time::format_clock(&self.end)
        )
    }
}

/// The three windows computed for one day
#[derive(Debug, Clone, PartialEq)]
pub struct InauspiciousPeriods {
    pub rahu_kalam: PeriodWindow,
    pub yamagandam: PeriodWindow,
    pub gulikai_kalam: PeriodWindow,
}

impl InauspiciousPeriods {
    pub fn windows(&self) -> [&PeriodWindow; 3] {
        [&self.rahu_kalam, &self.yamagandam, &self.gulikai_kalam]
    }
}

/// Sunrise, sunset and the three windows, all in civil time
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
    pub periods: InauspiciousPeriods,
}

/// Configuration for the service
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Server
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default)]
    pub static_dir: Option<String>,
    
    // Civil time zone used for every response
    #[serde(default = "default_timezone")]
    pub timezone: String,
    
    // Reference location used when a request omits lat/lng
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,
    #[serde(default = "default_longitude")]
    pub default_longitude: f64,
    
    // Sunrise lookup
    #[serde(default = "default_upstream_base_url")]
    pub upstream_base_url: String,
    #[serde(default = "default_upstream_timeout_sec")]
    pub upstream_timeout_sec: u64,
    
    // Logging
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_json: bool,
}

fn default_bind_address() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_timezone() -> String {
    "America/Chicago".to_string()
}

fn default_latitude() -> f64 {
    30.2672
}

fn default_longitude() -> f64 {
    -97.7431
}

fn default_upstream_base_url() -> String {
    crate::sun::sunrise_sunset::DEFAULT_BASE_URL.to_string()
}

fn default_upstream_timeout_sec() -> u64 {
    30
}

fn default_log_level() -> String {
    "kalam=debug,info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: default_bind_address(),
            static_dir: None,
            timezone: default_timezone(),
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
            upstream_base_url: default_upstream_base_url(),
            upstream_timeout_sec: default_upstream_timeout_sec(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    pub fn time_zone(&self) -> Result<Tz> {
        crate::time::parse_time_zone(&self.timezone)
    }
    
    pub fn default_coordinate(&self) -> Coordinate {
        Coordinate::new(self.default_latitude, self.default_longitude)
    }
    
    pub fn upstream_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.upstream_timeout_sec)
    }
    
    pub fn socket_addr(&self) -> Result<std::net::SocketAddr> {
        self.bind_address
            .parse()
            .map_err(|e| KalamError::ConfigError(format!("Invalid bind_address '{}': {}", self.bind_address, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_date_selector_today_token() {
        assert_eq!(DateSelector::parse("today"), DateSelector::Today);
        assert_eq!(DateSelector::parse("today").as_str(), "today");
    }
    
    #[test]
    fn test_date_selector_passes_explicit_date_verbatim() {
        let selector = DateSelector::parse("2024-06-21");
        assert_eq!(selector, DateSelector::Date("2024-06-21".to_string()));
        assert_eq!(selector.as_str(), "2024-06-21");
    }
    
    #[test]
    fn test_default_config_points_at_austin() {
        let config = Config::default();
        assert_eq!(config.default_coordinate(), Coordinate::new(30.2672, -97.7431));
        assert_eq!(config.time_zone().unwrap(), chrono_tz::America::Chicago);
        assert!(config.socket_addr().is_ok());
    }
}
