//! HTTP server for the inauspicious-period service.
//!
//! ```text
//! GET /                 landing page
//! GET /health           liveness probe
//! GET /sunrise-sunset   sunrise, sunset and the three windows
//! ```
//!
//! Handlers fetch sun times through the [`SunTimesProvider`](crate::sun::SunTimesProvider)
//! held in [`AppState`] and render every time in the configured zone.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
