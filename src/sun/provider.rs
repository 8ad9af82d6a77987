/// Boundary contract for sunrise/sunset lookups
use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Coordinate, DateSelector, SunTimes};

/// Source of sunrise and sunset instants for a place and day.
///
/// Implementations never retry. A non-success answer from the backing
/// service is reported as [`KalamError::UpstreamFetch`](crate::KalamError::UpstreamFetch)
/// carrying the status code.
#[async_trait]
pub trait SunTimesProvider: Send + Sync {
    async fn sun_times(&self, coordinate: Coordinate, date: &DateSelector) -> Result<SunTimes>;
}
