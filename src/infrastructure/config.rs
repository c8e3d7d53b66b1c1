//! Configuration infrastructure
//!
//! Contains configuration loading for the catalog and forecast scrapers.
//!
//! Every field has a default, and the defaults reproduce the fixed
//! behavior of the scrapers: years 2000-2017, pages 1-4, a 72 request
//! ceiling and an 8-15 second pause between catalog requests. A config
//! file only needs the fields it overrides.

#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use tokio::fs;

use crate::infrastructure::parsing::ParsingConfig;

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog (movie ratings) scrape settings
    pub catalog: CatalogConfig,

    /// Forecast (weather) scrape settings
    pub forecast: ForecastConfig,

    /// HTTP client behavior shared by both scrapers
    pub http: HttpConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// CSS selectors for both sites
    pub parsing: ParsingConfig,
}

/// Settings for the paginated catalog scrape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Search endpoint, without query parameters
    pub base_url: String,

    /// Value of the `sort` query parameter
    pub sort: String,

    /// First release year to request (inclusive)
    pub first_year: u16,

    /// Last release year to request (inclusive)
    pub last_year: u16,

    /// First result page per year (inclusive)
    pub first_page: u32,

    /// Last result page per year (inclusive)
    pub last_page: u32,

    /// The run stops once the request count is strictly greater than this
    pub request_ceiling: u32,

    /// Shortest pause after each request, in whole seconds
    pub min_delay_seconds: u64,

    /// Longest pause after each request, in whole seconds
    pub max_delay_seconds: u64,

    /// Where the CSV is written
    pub output_path: PathBuf,

    /// Print the rating/metascore histograms after the CSV is written
    pub show_distributions: bool,
}

/// Settings for the single-page forecast scrape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Forecast page, without query parameters
    pub base_url: String,

    pub latitude: f64,

    pub longitude: f64,

    /// Where the CSV is written
    pub output_path: PathBuf,
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,

    /// Per-request timeout. Unset means a hung request blocks the run.
    pub timeout_seconds: Option<u64>,

    pub follow_redirects: bool,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Enable console (stderr) output
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,

    /// Directory for log files; defaults to `logs` next to the executable
    pub log_dir: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn years(&self) -> RangeInclusive<u16> {
        self.first_year..=self.last_year
    }

    pub fn pages(&self) -> RangeInclusive<u32> {
        self.first_page..=self.last_page
    }

    /// Number of (year, page) pairs the configured ranges enumerate
    pub fn planned_requests(&self) -> usize {
        self.years().count() * self.pages().count()
    }

    pub fn delay_range(&self) -> RangeInclusive<u64> {
        self.min_delay_seconds..=self.max_delay_seconds
    }
}

impl ForecastConfig {
    /// Forecast page URL with the coordinates as query parameters
    pub fn page_url(&self) -> Result<url::Url> {
        utils::forecast_page_url(&self.base_url, self.latitude, self.longitude)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: imdb::SEARCH_TITLE_URL.to_string(),
            sort: imdb::SORT_BY_VOTES_DESC.to_string(),
            first_year: defaults::FIRST_YEAR,
            last_year: defaults::LAST_YEAR,
            first_page: defaults::FIRST_PAGE,
            last_page: defaults::LAST_PAGE,
            request_ceiling: defaults::REQUEST_CEILING,
            min_delay_seconds: defaults::MIN_DELAY_SECONDS,
            max_delay_seconds: defaults::MAX_DELAY_SECONDS,
            output_path: PathBuf::from(defaults::MOVIE_RATINGS_CSV),
            show_distributions: true,
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: weather_gov::MAP_CLICK_URL.to_string(),
            latitude: weather_gov::SAN_FRANCISCO_LAT,
            longitude: weather_gov::SAN_FRANCISCO_LON,
            output_path: PathBuf::from(defaults::WEATHER_DATA_CSV),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::USER_AGENT.to_string(),
            timeout_seconds: None,
            follow_redirects: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            json_format: defaults::LOG_JSON_FORMAT,
            console_output: defaults::LOG_CONSOLE_OUTPUT,
            file_output: defaults::LOG_FILE_OUTPUT,
            log_dir: None,
        }
    }
}

/// Configuration manager for loading settings
pub struct ConfigManager {
    pub config_path: PathBuf,
}

impl ConfigManager {
    /// Get the application configuration directory
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get user config directory")?
            .join(defaults::APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Create a manager pointing at the per-user config file
    pub fn new() -> Result<Self> {
        let config_path = Self::get_config_dir()?.join(defaults::CONFIG_FILE_NAME);
        Ok(Self { config_path })
    }

    /// Create a manager pointing at an explicit config file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    /// Load configuration from file, falling back to defaults if it doesn't exist
    ///
    /// Nothing is written back; a missing file is not an error, a malformed one is.
    /// The returned [`ConfigSource`] is meant to be logged once logging is up.
    pub async fn load_config(&self) -> Result<(AppConfig, ConfigSource)> {
        if !fs::try_exists(&self.config_path).await.unwrap_or(false) {
            return Ok((AppConfig::default(), ConfigSource::Defaults(self.config_path.clone())));
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .with_context(|| format!("Failed to read configuration file {:?}", self.config_path))?;

        let config = parse_config(&content)
            .with_context(|| format!("Invalid configuration file {:?}", self.config_path))?;

        Ok((config, ConfigSource::File(self.config_path.clone())))
    }
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at this path
    Defaults(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "Loaded configuration from: {:?}", path),
            Self::Defaults(path) => write!(f, "Configuration file not found, using defaults: {:?}", path),
        }
    }
}

/// Parse a JSON configuration document; absent fields take their defaults
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let config: AppConfig =
        serde_json::from_str(content).context("Configuration file contains invalid JSON")?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<()> {
    let catalog = &config.catalog;
    if catalog.min_delay_seconds > catalog.max_delay_seconds {
        anyhow::bail!(
            "catalog.min_delay_seconds ({}) is greater than catalog.max_delay_seconds ({})",
            catalog.min_delay_seconds,
            catalog.max_delay_seconds
        );
    }
    if catalog.first_year > catalog.last_year {
        anyhow::bail!(
            "catalog.first_year ({}) is after catalog.last_year ({})",
            catalog.first_year,
            catalog.last_year
        );
    }
    if catalog.first_page > catalog.last_page {
        anyhow::bail!(
            "catalog.first_page ({}) is after catalog.last_page ({})",
            catalog.first_page,
            catalog.last_page
        );
    }
    Ok(())
}

/// IMDB search endpoint constants
pub mod imdb {
    /// Title search page; takes `release_date`, `sort` and `page` parameters
    pub const SEARCH_TITLE_URL: &str = "http://www.imdb.com/search/title";

    /// Most-voted titles first
    pub const SORT_BY_VOTES_DESC: &str = "num_votes,desc";

    pub const PARAM_RELEASE_DATE: &str = "release_date";
    pub const PARAM_SORT: &str = "sort";
    pub const PARAM_PAGE: &str = "page";
}

/// National Weather Service forecast page constants
pub mod weather_gov {
    pub const MAP_CLICK_URL: &str = "http://forecast.weather.gov/MapClick.php";

    pub const SAN_FRANCISCO_LAT: f64 = 37.7772;
    pub const SAN_FRANCISCO_LON: f64 = -122.4168;

    pub const PARAM_LAT: &str = "lat";
    pub const PARAM_LON: &str = "lon";
}

/// Default configuration values
pub mod defaults {
    pub const APP_DIR_NAME: &str = "ratings-weather-scraper";
    pub const CONFIG_FILE_NAME: &str = "config.json";

    pub const FIRST_YEAR: u16 = 2000;
    pub const LAST_YEAR: u16 = 2017;
    pub const FIRST_PAGE: u32 = 1;
    pub const LAST_PAGE: u32 = 4;

    /// Hard stop for the catalog run, independent of the year/page ranges
    pub const REQUEST_CEILING: u32 = 72;

    pub const MIN_DELAY_SECONDS: u64 = 8;
    pub const MAX_DELAY_SECONDS: u64 = 15;

    /// Containers per catalog results page
    pub const TITLES_PER_PAGE: usize = 50;

    pub const MOVIE_RATINGS_CSV: &str = "movie_ratings.csv";
    pub const WEATHER_DATA_CSV: &str = "weather_data.csv";

    pub const USER_AGENT: &str = "ratings-weather-scraper/0.1 (Educational Purpose)";

    pub const LOG_LEVEL: &str = "info";
    pub const LOG_JSON_FORMAT: bool = false;
    pub const LOG_CONSOLE_OUTPUT: bool = true;
    pub const LOG_FILE_OUTPUT: bool = false;
}

/// URL building helper functions
pub mod utils {
    use super::{imdb, weather_gov};
    use anyhow::{Context, Result};
    use url::Url;

    /// Build a catalog search URL for one (year, page) pair
    /// e.g. `http://www.imdb.com/search/title?release_date=2005&sort=num_votes%2Cdesc&page=3`
    pub fn catalog_page_url(base_url: &str, year: u16, sort: &str, page: u32) -> Result<Url> {
        let year = year.to_string();
        let page = page.to_string();
        Url::parse_with_params(
            base_url,
            [
                (imdb::PARAM_RELEASE_DATE, year.as_str()),
                (imdb::PARAM_SORT, sort),
                (imdb::PARAM_PAGE, page.as_str()),
            ],
        )
        .with_context(|| format!("Invalid catalog base URL: {base_url}"))
    }

    /// Build the forecast URL for a coordinate pair
    pub fn forecast_page_url(base_url: &str, latitude: f64, longitude: f64) -> Result<Url> {
        let lat = latitude.to_string();
        let lon = longitude.to_string();
        Url::parse_with_params(
            base_url,
            [
                (weather_gov::PARAM_LAT, lat.as_str()),
                (weather_gov::PARAM_LON, lon.as_str()),
            ],
        )
        .with_context(|| format!("Invalid forecast base URL: {base_url}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_run() {
        let config = AppConfig::default();
        assert_eq!(config.catalog.years(), 2000..=2017);
        assert_eq!(config.catalog.pages(), 1..=4);
        assert_eq!(config.catalog.planned_requests(), 72);
        assert_eq!(config.catalog.request_ceiling, 72);
        assert_eq!(config.catalog.delay_range(), 8..=15);
        assert_eq!(config.catalog.output_path, PathBuf::from("movie_ratings.csv"));
        assert_eq!(config.forecast.output_path, PathBuf::from("weather_data.csv"));
        assert!(config.http.timeout_seconds.is_none());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config(r#"{ "catalog": { "last_year": 2001, "last_page": 2 } }"#).unwrap();
        assert_eq!(config.catalog.years(), 2000..=2001);
        assert_eq!(config.catalog.pages(), 1..=2);
        assert_eq!(config.catalog.request_ceiling, 72);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.parsing.catalog.metascore_badge, "div.ratings-metascore");
    }

    #[test]
    fn test_inverted_delay_range_rejected() {
        let result =
            parse_config(r#"{ "catalog": { "min_delay_seconds": 20, "max_delay_seconds": 5 } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(parse_config("{ not json").is_err());
    }

    #[test]
    fn test_catalog_page_url() {
        let url = utils::catalog_page_url(imdb::SEARCH_TITLE_URL, 2005, "num_votes,desc", 3).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(url.path(), "/search/title");
        assert_eq!(
            pairs,
            vec![
                ("release_date".to_string(), "2005".to_string()),
                ("sort".to_string(), "num_votes,desc".to_string()),
                ("page".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_forecast_page_url() {
        let url = ForecastConfig::default().page_url().unwrap();
        assert_eq!(
            url.as_str(),
            "http://forecast.weather.gov/MapClick.php?lat=37.7772&lon=-122.4168"
        );
    }

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        let (config, source) = ConfigManager::with_path(&path).load_config().await.unwrap();
        assert_eq!(config.catalog.request_ceiling, 72);
        assert_eq!(source, ConfigSource::Defaults(path.clone()));
        assert!(source.to_string().starts_with("Configuration file not found, using defaults"));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "forecast": { "latitude": 40.7, "longitude": -74.0 } }"#).unwrap();
        let (config, source) = ConfigManager::with_path(&path).load_config().await.unwrap();
        assert_eq!(source, ConfigSource::File(path.clone()));
        assert!(source.to_string().starts_with("Loaded configuration from"));
        assert_eq!(config.forecast.latitude, 40.7);
        assert_eq!(config.forecast.longitude, -74.0);
    }
}
