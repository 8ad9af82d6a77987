/// Main entry point for the inauspicious-period server
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use kalam::{
    config::{load_config, load_config_from_env},
    error::Result,
    http::{create_router, AppState},
    sun::SunriseSunsetClient,
    utils::init_logging,
    Config,
};

/// Config file named by `CONFIG_PATH` (default `config.toml`) if present,
/// otherwise defaults plus `KALAM_*` environment variables
fn resolve_config() -> Result<Config> {
    let config_path = std::env::var("CONFIG_PATH")
        .unwrap_or_else(|_| "config.toml".to_string());
    
    if Path::new(&config_path).exists() {
        load_config(&config_path)
    } else {
        load_config_from_env()
    }
}

/// Build the application state from explicit configuration
async fn build_state(config: &Config) -> Result<AppState> {
    let zone = config.time_zone()?;
    let provider = SunriseSunsetClient::new(
        config.upstream_base_url.clone(),
        config.upstream_timeout(),
    )?;
    
    let mut state = AppState::new(Arc::new(provider), zone, config.default_coordinate());
    
    if let Some(dir) = &config.static_dir {
        let index_path = Path::new(dir).join("index.html");
        match tokio::fs::read_to_string(&index_path).await {
            Ok(html) => {
                info!("Serving landing page from {}", index_path.display());
                state = state.with_index_html(html);
            }
            Err(e) => warn!("Cannot read {} ({}); using built-in landing page", index_path.display(), e),
        }
    }
    
    Ok(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = resolve_config()?;
    init_logging(&config);
    
    info!("Starting kalam server...");
    info!(
        "Time zone {}, default location ({}, {}), sunrise lookup at {}",
        config.timezone,
        config.default_latitude,
        config.default_longitude,
        config.upstream_base_url
    );
    
    let state = build_state(&config).await?;
    let app = create_router(state);
    
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);
    
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Ctrl+C received - shutting down");
        })
        .await?;
    
    Ok(())
}
