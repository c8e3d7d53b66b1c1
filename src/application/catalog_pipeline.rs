//! Catalog scrape: every (year, page) search result page, one at a time
//!
//! Each request is followed by a random pause, counted, and reported on a
//! progress line. Non-success statuses are logged and the page is parsed
//! anyway. Once the request count goes past the configured ceiling the run
//! stops, keeping what it already collected.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info, trace, warn};

use super::delay::{DelayStrategy, RandomDelay};
use super::page_fetcher::PageFetcher;
use crate::domain::movie::MovieRecord;
use crate::domain::request_counter::RequestCounter;
use crate::infrastructure::config::{CatalogConfig, utils};
use crate::infrastructure::csv_export;
use crate::infrastructure::distribution::DistributionReport;
use crate::infrastructure::parsing::{
    CatalogPageContext, CatalogSelectors, ContextualParser, MovieListParser,
};

/// State threaded through one catalog run
#[derive(Debug, Default)]
pub struct CatalogRun {
    pub counter: RequestCounter,
    pub records: Vec<MovieRecord>,
    /// Request ordinals that came back with a non-success status
    pub failed_requests: Vec<(u32, u16)>,
    pub stopped_at_ceiling: bool,
}

impl CatalogRun {
    pub fn requests(&self) -> u32 {
        self.counter.requests()
    }
}

pub struct CatalogPipeline<F, D> {
    config: CatalogConfig,
    fetcher: F,
    delay: D,
    delays: RandomDelay,
    parser: MovieListParser,
    show_progress: bool,
}

impl<F: PageFetcher, D: DelayStrategy> CatalogPipeline<F, D> {
    pub fn new(config: CatalogConfig, fetcher: F, delay: D) -> Result<Self> {
        Self::with_selectors(config, &CatalogSelectors::default(), fetcher, delay)
    }

    pub fn with_selectors(
        config: CatalogConfig,
        selectors: &CatalogSelectors,
        fetcher: F,
        delay: D,
    ) -> Result<Self> {
        let parser = MovieListParser::with_config(selectors)?;
        let delays = RandomDelay::new(config.delay_range());
        Ok(Self {
            config,
            fetcher,
            delay,
            delays,
            parser,
            show_progress: true,
        })
    }

    /// Replace the pause-length generator, e.g. with a seeded one
    pub fn with_delays(mut self, delays: RandomDelay) -> Self {
        self.delays = delays;
        self
    }

    /// Turn the in-place stdout progress line on or off
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Fetch and extract every configured page
    ///
    /// Transport faults and extraction faults end the run with an error and
    /// nothing is returned.
    pub async fn collect(&mut self) -> Result<CatalogRun> {
        let mut run = CatalogRun::default();
        let ceiling = self.config.request_ceiling;

        info!(
            "Scraping years {}-{}, pages {}-{} ({} requests planned, ceiling {})",
            self.config.first_year,
            self.config.last_year,
            self.config.first_page,
            self.config.last_page,
            self.config.planned_requests(),
            ceiling
        );

        'years: for year in self.config.years() {
            for page in self.config.pages() {
                let url = utils::catalog_page_url(&self.config.base_url, year, &self.config.sort, page)?;
                let fetched = self.fetcher.fetch(url.as_str()).await?;

                let pause = self.delays.next_delay();
                self.delay.pause(pause).await;

                let request = run.counter.record_attempt();
                self.report_progress(&run.counter);

                if !fetched.is_success() {
                    warn!("Request: {}; Status code: {}", request, fetched.status);
                    run.failed_requests.push((request, fetched.status));
                }

                if run.counter.exceeds(ceiling) {
                    warn!("Number of requests was greater than expected.");
                    run.stopped_at_ceiling = true;
                    break 'years;
                }

                let context = CatalogPageContext::new(year, page);
                let extract = self
                    .parser
                    .parse_str(&fetched.body, &context)
                    .with_context(|| format!("Failed to extract titles from {context} ({url})"))?;
                run.records.extend(extract.records);
            }
        }

        if self.show_progress {
            println!();
        }
        info!(
            "Collected {} titles in {} requests",
            run.records.len(),
            run.requests()
        );
        Ok(run)
    }

    /// Collect, write the CSV, then print the distribution report
    pub async fn execute(&mut self) -> Result<CatalogRun> {
        let run = self.collect().await?;
        csv_export::export_movies(&self.config.output_path, &run.records)?;

        if self.config.show_distributions {
            println!("{}", DistributionReport::from_records(&run.records).render());
        }
        Ok(run)
    }

    fn report_progress(&self, counter: &RequestCounter) {
        let line = counter.progress_line();
        debug!("{}", line);
        if self.show_progress {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout
                .write_all(progress_frame(&line).as_bytes())
                .and_then(|()| stdout.flush())
            {
                trace!("Progress line not written: {}", e);
            }
        }
    }
}

/// Overwrite the current terminal line: carriage return, text, then
/// erase whatever a longer previous line left behind.
fn progress_frame(line: &str) -> String {
    format!("\r{line}\x1b[K")
}
