//! HTTP handlers for the REST API.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use tracing::info;

use super::dto::{HealthResponse, SunriseSunsetQuery, SunriseSunsetResponse};
use super::error::AppError;
use super::state::AppState;
use crate::time::daily_report;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.index_html.to_string())
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /sunrise-sunset?lat=<float>&lng=<float>&date=<string|today>
///
/// Looks up sunrise and sunset for the coordinate and date, then returns
/// them with Rahu Kalam, Yamagandam and Gulikai Kalam in the configured zone.
pub async fn sunrise_sunset(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> HandlerResult<SunriseSunsetResponse> {
    let query = SunriseSunsetQuery::from_pairs(pairs);
    let coordinate = query.coordinate(state.default_coordinate);
    let date = query.date_selector();
    info!(
        "Sunrise-sunset request: lat={}, lng={}, date={}",
        coordinate.latitude,
        coordinate.longitude,
        date.as_str()
    );

    let sun_times = state.provider.sun_times(coordinate, &date).await?;
    let report = daily_report(&sun_times, &state.zone);

    Ok(Json(SunriseSunsetResponse::from(&report)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{KalamError, Result};
    use crate::sun::SunTimesProvider;
    use crate::types::{Coordinate, DateSelector, SunTimes};
    use async_trait::async_trait;
    use axum::{http::StatusCode, response::IntoResponse};
    use chrono::{TimeZone, Utc};
    use chrono_tz::America::Chicago;
    use std::sync::{Arc, Mutex};

    /// Records every lookup and answers with a canned result
    struct FakeProvider {
        calls: Mutex<Vec<(Coordinate, DateSelector)>>,
        fail_with: Option<u16>,
    }

    impl FakeProvider {
        fn ok() -> Arc<Self> {
            Arc::new(FakeProvider { calls: Mutex::new(Vec::new()), fail_with: None })
        }

        fn failing(status: u16) -> Arc<Self> {
            Arc::new(FakeProvider { calls: Mutex::new(Vec::new()), fail_with: Some(status) })
        }
    }

    #[async_trait]
    impl SunTimesProvider for FakeProvider {
        async fn sun_times(&self, coordinate: Coordinate, date: &DateSelector) -> Result<SunTimes> {
            self.calls.lock().unwrap().push((coordinate, date.clone()));
            if let Some(status) = self.fail_with {
                return Err(KalamError::UpstreamFetch { status });
            }
            Ok(SunTimes {
                sunrise: Utc.with_ymd_and_hms(2024, 1, 1, 13, 0, 0).unwrap(),
                sunset: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
            })
        }
    }

    fn state_with(provider: Arc<FakeProvider>) -> AppState {
        AppState::new(provider, Chicago, Coordinate::new(30.2672, -97.7431))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_success_body() {
        let provider = FakeProvider::ok();
        let response = sunrise_sunset(State(state_with(provider)), Query(Vec::new()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["Sunrise"], "07:00 AM");
        assert_eq!(json["Sunset"], "06:00 PM");
        assert_eq!(json["Rahu Kalam"], "08:22 AM to 09:45 AM");
        assert_eq!(json["Yamagandam"], "11:07 AM to 12:30 PM");
        assert_eq!(json["Gulikai Kalam"], "01:52 PM to 03:15 PM");
    }

    #[tokio::test]
    async fn test_defaults_reach_provider() {
        let provider = FakeProvider::ok();
        let _ = sunrise_sunset(State(state_with(provider.clone())), Query(Vec::new())).await;

        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Coordinate::new(30.2672, -97.7431));
        assert_eq!(calls[0].1, DateSelector::Today);
    }

    #[tokio::test]
    async fn test_query_values_reach_provider() {
        let provider = FakeProvider::ok();
        let pairs = vec![
            ("lat".to_string(), "40.7128".to_string()),
            ("lng".to_string(), "abc".to_string()),
            ("date".to_string(), "2024-12-21".to_string()),
        ];
        let _ = sunrise_sunset(State(state_with(provider.clone())), Query(pairs)).await;

        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls[0].0, Coordinate::new(40.7128, -97.7431));
        assert_eq!(calls[0].1, DateSelector::Date("2024-12-21".to_string()));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_request() {
        let provider = FakeProvider::failing(503);
        let response = sunrise_sunset(State(state_with(provider)), Query(Vec::new()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        let message = json["error"].as_str().unwrap();
        assert!(message.contains("503"));
    }

    #[tokio::test]
    async fn test_index_serves_landing_page() {
        let state = state_with(FakeProvider::ok()).with_index_html("<h1>kalam</h1>");
        let Html(body) = index(State(state)).await;
        assert_eq!(body, "<h1>kalam</h1>");
    }

    #[tokio::test]
    async fn test_health_check() {
        let Json(health) = health_check().await;
        assert_eq!(health.status, "ok");
    }
}
