/// Print sunrise, sunset and the inauspicious windows for one day
/// Usage: cargo run --bin show_periods -- --lat 30.2672 --lng -97.7431 --date 2024-06-21

use clap::Parser;
use kalam::config::load_config_from_env;
use kalam::http::dto::SunriseSunsetResponse;
use kalam::sun::{SunTimesProvider, SunriseSunsetClient};
use kalam::time::daily_report;
use kalam::utils::init_logging;
use kalam::{Coordinate, DateSelector};

#[derive(Debug, Parser)]
#[command(about = "Rahu Kalam, Yamagandam and Gulikai Kalam for one day")]
struct Args {
    /// Latitude (defaults to the configured reference location)
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude (defaults to the configured reference location)
    #[arg(long, allow_negative_numbers = true)]
    lng: Option<f64>,

    /// `today` or a calendar date such as 2024-06-21
    #[arg(long, default_value = "today")]
    date: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config_from_env()?;
    init_logging(&config);

    let zone = config.time_zone()?;
    let coordinate = Coordinate::new(
        args.lat.unwrap_or(config.default_latitude),
        args.lng.unwrap_or(config.default_longitude),
    );
    let date = DateSelector::parse(&args.date);

    let client = SunriseSunsetClient::new(config.upstream_base_url.clone(), config.upstream_timeout())?;
    let sun_times = client.sun_times(coordinate, &date).await?;
    let report = daily_report(&sun_times, &zone);
    let response = SunriseSunsetResponse::from(&report);

    println!("📍 ({}, {}) on {} [{}]", coordinate.latitude, coordinate.longitude, date.as_str(), zone);
    println!("   Sunrise:       {}", response.sunrise);
    println!("   Sunset:        {}", response.sunset);
    println!("   Rahu Kalam:    {}", response.rahu_kalam);
    println!("   Yamagandam:    {}", response.yamagandam);
    println!("   Gulikai Kalam: {}", response.gulikai_kalam);

    Ok(())
}
