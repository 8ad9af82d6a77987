//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::time::format_clock;
use crate::types::{Coordinate, DailyReport, DateSelector, TODAY};

/// Query string of `GET /sunrise-sunset`.
///
/// Values are kept as raw strings so that an unparsable `lat`/`lng`
/// falls back to the default instead of failing the request.
#[derive(Debug, Clone, Default)]
pub struct SunriseSunsetQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub date: Option<String>,
}

impl SunriseSunsetQuery {
    /// First occurrence of each key wins; unknown keys are ignored
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = SunriseSunsetQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "lat" => &mut query.lat,
                "lng" => &mut query.lng,
                "date" => &mut query.date,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn coordinate(&self, default: Coordinate) -> Coordinate {
        Coordinate {
            latitude: parse_float_or(self.lat.as_deref(), default.latitude),
            longitude: parse_float_or(self.lng.as_deref(), default.longitude),
        }
    }

    pub fn date_selector(&self) -> DateSelector {
        DateSelector::parse(self.date.as_deref().unwrap_or(TODAY))
    }
}

fn parse_float_or(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(default)
}

/// Body of a successful `GET /sunrise-sunset`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunriseSunsetResponse {
    #[serde(rename = "Sunrise")]
    pub sunrise: String,
    #[serde(rename = "Sunset")]
    pub sunset: String,
    #[serde(rename = "Rahu Kalam")]
    pub rahu_kalam: String,
    #[serde(rename = "Yamagandam")]
    pub yamagandam: String,
    #[serde(rename = "Gulikai Kalam")]
    pub gulikai_kalam: String,
}

impl From<&DailyReport> for SunriseSunsetResponse {
    fn from(report: &DailyReport) -> Self {
        Self {
            sunrise: format_clock(&report.sunrise),
            sunset: format_clock(&report.sunset),
            rahu_kalam: report.periods.rahu_kalam.render(),
            yamagandam: report.periods.yamagandam.render(),
            gulikai_kalam: report.periods.gulikai_kalam.render(),
        }
    }
}

/// Error body: `{"error": "<message>"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
