//! Application state for the HTTP server.

use chrono_tz::Tz;
use std::sync::Arc;

use crate::sun::SunTimesProvider;
use crate::types::Coordinate;

/// Landing page compiled into the binary
pub const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Shared, read-only state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Sunrise/sunset lookup
    pub provider: Arc<dyn SunTimesProvider>,
    /// Civil zone every response is rendered in
    pub zone: Tz,
    /// Used when a request omits or garbles lat/lng
    pub default_coordinate: Coordinate,
    pub index_html: Arc<str>,
}

impl AppState {
    pub fn new(provider: Arc<dyn SunTimesProvider>, zone: Tz, default_coordinate: Coordinate) -> Self {
        Self {
            provider,
            zone,
            default_coordinate,
            index_html: Arc::from(INDEX_HTML),
        }
    }

    /// Serve a different landing page (e.g. read from `static_dir`)
    pub fn with_index_html(mut self, html: impl Into<Arc<str>>) -> Self {
        self.index_html = html.into();
        self
    }
}
