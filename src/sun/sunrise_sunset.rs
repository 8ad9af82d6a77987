/// sunrise-sunset.org REST client
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{KalamError, Result};
use crate::sun::provider::SunTimesProvider;
use crate::time::parse_utc_instant;
use crate::types::{Coordinate, DateSelector, SunTimes};

pub const DEFAULT_BASE_URL: &str = "https://api.sunrise-sunset.org/json";

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    results: serde_json::Value,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LookupResults {
    sunrise: Option<String>,
    sunset: Option<String>,
}

/// Client for `GET <base>?lat=..&lng=..&date=..&formatted=0`
pub struct SunriseSunsetClient {
    client: Client,
    base_url: String,
}

impl SunriseSunsetClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;
        
        Ok(SunriseSunsetClient {
            client,
            base_url: base_url.into(),
        })
    }
    
    /// Query parameters sent upstream; `formatted=0` asks for ISO-8601 UTC
    pub fn query_params(coordinate: Coordinate, date: &DateSelector) -> Vec<(&'static str, String)> {
        vec![
            ("lat", coordinate.latitude.to_string()),
            ("lng", coordinate.longitude.to_string()),
            ("date", date.as_str().to_string()),
            ("formatted", "0".to_string()),
        ]
    }
}

#[async_trait]
impl SunTimesProvider for SunriseSunsetClient {
    async fn sun_times(&self, coordinate: Coordinate, date: &DateSelector) -> Result<SunTimes> {
        let params = Self::query_params(coordinate, date);
        debug!("Fetching sun times from {} with {:?}", self.base_url, params);
        
        let response = self.client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?;
        
        let status = response.status();
        if status != StatusCode::OK {
            warn!("Sunrise lookup returned HTTP {}", status.as_u16());
            return Err(KalamError::UpstreamFetch { status: status.as_u16() });
        }
        
        let body = response.text().await?;
        let sun_times = parse_lookup_body(&body)?;
        
        info!(
            "Sun times for ({}, {}) on {}: sunrise {}, sunset {}",
            coordinate.latitude,
            coordinate.longitude,
            date.as_str(),
            sun_times.sunrise,
            sun_times.sunset
        );
        Ok(sun_times)
    }
}

/// Decode a 200 response body into instants
fn parse_lookup_body(body: &str) -> Result<SunTimes> {
    let lookup: LookupResponse = serde_json::from_str(body)?;
    
    if let Some(status) = lookup.status.as_deref() {
        if status != "OK" {
            return Err(KalamError::UpstreamRejected(status.to_string()));
        }
    }
    
    if lookup.results.is_null() {
        return Err(KalamError::ParseError("No results in sunrise lookup response".to_string()));
    }
    let results: LookupResults = serde_json::from_value(lookup.results)?;
    
    let sunrise = results.sunrise
        .ok_or_else(|| KalamError::ParseError("Missing sunrise in lookup response".to_string()))?;
    let sunset = results.sunset
        .ok_or_else(|| KalamError::ParseError("Missing sunset in lookup response".to_string()))?;
    
    Ok(SunTimes {
        sunrise: parse_utc_instant(&sunrise)?,
        sunset: parse_utc_instant(&sunset)?,
    })
}
