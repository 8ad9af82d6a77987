/// Centralized error types for the inauspicious-period service
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KalamError {
    // Upstream Errors
    #[error("Failed to fetch data. HTTP Status Code: {status}")]
    UpstreamFetch { status: u16 },
    
    #[error("Sunrise lookup rejected the request: {0}")]
    UpstreamRejected(String),
    
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    
    // Data Errors
    #[error("Deserialization failed: {0}")]
    DeserializationError(#[from] serde_json::Error),
    
    #[error("Parse error: {0}")]
    ParseError(String),
    
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
    
    // Configuration Errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, KalamError>;

impl KalamError {
    /// Errors caused by the external sunrise/sunset lookup
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            KalamError::UpstreamFetch { .. }
                | KalamError::UpstreamRejected(_)
                | KalamError::HttpError(_)
        )
    }
    
    /// Get error code for logging/monitoring
    pub fn error_code(&self) -> &str {
        match self {
            KalamError::UpstreamFetch { .. } => "UPSTREAM_001",
            KalamError::UpstreamRejected(_) => "UPSTREAM_002",
            KalamError::HttpError(_) => "NET_001",
            KalamError::DeserializationError(_) => "DATA_001",
            KalamError::ParseError(_) => "DATA_002",
            KalamError::UnknownTimeZone(_) => "DATA_003",
            KalamError::ConfigError(_) => "CFG_001",
        }
    }
}
