/// Configuration loading from TOML file or environment
use std::path::Path;
use crate::error::{KalamError, Result};
use crate::types::Config;

/// Prefix for environment overrides, e.g. `KALAM_TIMEZONE`
pub const ENV_PREFIX: &str = "KALAM";

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| KalamError::ConfigError(format!("Failed to read config file: {}", e)))?;
    
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| KalamError::ConfigError(format!("Failed to parse config: {}", e)))?;
    
    validate_config(&config)?;
    
    Ok(config)
}

/// Defaults overlaid with `KALAM_*` environment variables
pub fn load_config_from_env() -> Result<Config> {
    let settings = ::config::Config::builder()
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
        )
        .build()
        .map_err(|e| KalamError::ConfigError(format!("Failed to read environment: {}", e)))?;
    
    let config: Config = settings
        .try_deserialize()
        .map_err(|e| KalamError::ConfigError(format!("Failed to parse environment: {}", e)))?;
    
    validate_config(&config)?;
    
    Ok(config)
}

fn validate_config(config: &Config) -> Result<()> {
    // Validate time zone
    config.time_zone()
        .map_err(|e| KalamError::ConfigError(e.to_string()))?;
    
    // Validate server address
    config.socket_addr()?;
    
    // Validate upstream
    if config.upstream_base_url.trim().is_empty() {
        return Err(KalamError::ConfigError("upstream_base_url is empty".to_string()));
    }
    
    if config.upstream_timeout_sec == 0 {
        return Err(KalamError::ConfigError("upstream_timeout_sec must be > 0".to_string()));
    }
    
    // Validate reference location
    if !(-90.0..=90.0).contains(&config.default_latitude) {
        return Err(KalamError::ConfigError(
            format!("Invalid default_latitude: {}", config.default_latitude)
        ));
    }
    
    if !(-180.0..=180.0).contains(&config.default_longitude) {
        return Err(KalamError::ConfigError(
            format!("Invalid default_longitude: {}", config.default_longitude)
        ));
    }
    
    Ok(())
}
