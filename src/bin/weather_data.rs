//! Scrape the seven-day forecast for one location into `weather_data.csv`.

use std::process::ExitCode;

use anyhow::Result;
use tracing::{error, info};

use ratings_weather_scraper::application::ForecastPipeline;
use ratings_weather_scraper::infrastructure::{ConfigManager, HttpClient, init_logging_with_config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Forecast scrape failed: {:#}", e);
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let (config, source) = ConfigManager::new()?.load_config().await?;
    init_logging_with_config(&config.logging, "weather_data")?;
    info!("{}", source);

    let client = HttpClient::new(config.http.clone())?;
    let pipeline = ForecastPipeline::with_selectors(config.forecast.clone(), &config.parsing.forecast, client)?;

    let records = pipeline.execute().await?;
    info!(
        "Done: {} forecast periods written to {}",
        records.len(),
        config.forecast.output_path.display()
    );
    Ok(())
}
