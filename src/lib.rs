pub mod config;
pub mod log;
pub mod providers;
pub mod rate_provider;
pub mod rates;

use anyhow::Result;
use tracing::{debug, info};

/// Fetch exchange rates for the last `days` days and print them to stdout.
pub async fn run(days: u32, config_path: Option<&str>) -> Result<()> {
    if days > rates::MAX_DAYS {
        println!("Maximum value for days is {}.", rates::MAX_DAYS);
        return Ok(());
    }

    info!("Fetching exchange rates for the last {days} day(s)");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = providers::privatbank::PrivatbankProvider::new(&config.provider.base_url);
    let results = rates::fetch_last_days(&provider, days).await;

    for result in &results {
        println!("{result}");
    }

    Ok(())
}
