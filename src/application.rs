//! Application layer
//!
//! The two scrape pipelines and the seams they are driven through: the
//! page fetcher and the pause between requests.

pub mod catalog_pipeline;
pub mod delay;
pub mod forecast_pipeline;
pub mod page_fetcher;

pub use catalog_pipeline::{CatalogPipeline, CatalogRun};
pub use delay::{DelayStrategy, NoDelay, RandomDelay, TokioSleep};
pub use forecast_pipeline::ForecastPipeline;
pub use page_fetcher::{FetchedPage, PageFetcher};
