pub mod types;
pub mod error;
pub mod config;
pub mod time;
pub mod sun;
pub mod http;
pub mod utils;

pub use types::*;
pub use error::{Result, KalamError};
