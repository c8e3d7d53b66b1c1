//! Scrape IMDB search results for 2000-2017 into `movie_ratings.csv`.

use std::process::ExitCode;

use anyhow::Result;
use tracing::{error, info};

use ratings_weather_scraper::application::{CatalogPipeline, TokioSleep};
use ratings_weather_scraper::infrastructure::{ConfigManager, HttpClient, init_logging_with_config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Catalog scrape failed: {:#}", e);
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let (config, source) = ConfigManager::new()?.load_config().await?;
    init_logging_with_config(&config.logging, "movie_ratings")?;
    info!("{}", source);

    let client = HttpClient::new(config.http.clone())?;
    let mut pipeline =
        CatalogPipeline::with_selectors(config.catalog.clone(), &config.parsing.catalog, client, TokioSleep)?;

    let run = pipeline.execute().await?;
    info!(
        "Done: {} titles from {} requests ({} non-success){}",
        run.records.len(),
        run.requests(),
        run.failed_requests.len(),
        if run.stopped_at_ceiling { ", stopped at request ceiling" } else { "" }
    );
    Ok(())
}
