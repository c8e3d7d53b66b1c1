//! Forecast scrape: one page, no pacing

use anyhow::{Context, Result, bail};
use tracing::info;

use super::page_fetcher::PageFetcher;
use crate::domain::forecast::ForecastRecord;
use crate::infrastructure::config::ForecastConfig;
use crate::infrastructure::csv_export;
use crate::infrastructure::parsing::{
    ContextualParser, ForecastContext, ForecastParser, ForecastSelectors,
};

pub struct ForecastPipeline<F> {
    config: ForecastConfig,
    fetcher: F,
    parser: ForecastParser,
}

impl<F: PageFetcher> ForecastPipeline<F> {
    pub fn new(config: ForecastConfig, fetcher: F) -> Result<Self> {
        Self::with_selectors(config, &ForecastSelectors::default(), fetcher)
    }

    pub fn with_selectors(config: ForecastConfig, selectors: &ForecastSelectors, fetcher: F) -> Result<Self> {
        Ok(Self {
            config,
            fetcher,
            parser: ForecastParser::with_config(selectors)?,
        })
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch the forecast page and extract one record per period
    pub async fn collect(&self) -> Result<Vec<ForecastRecord>> {
        let url = self.config.page_url()?;
        let fetched = self.fetcher.fetch(url.as_str()).await?;
        if !fetched.is_success() {
            bail!("Forecast request failed with status {}: {}", fetched.status, url);
        }

        let records = self
            .parser
            .parse_str(&fetched.body, &ForecastContext::new(url.as_str()))
            .with_context(|| format!("Failed to extract forecast from {url}"))?;

        info!("Collected {} forecast periods", records.len());
        Ok(records)
    }

    /// Collect and write the CSV
    pub async fn execute(&self) -> Result<Vec<ForecastRecord>> {
        let records = self.collect().await?;
        csv_export::export_forecast(&self.config.output_path, &records)?;
        Ok(records)
    }
}
