//! Infrastructure layer for configuration, logging, HTTP, parsing and export

pub mod config;
pub mod csv_export;
pub mod distribution;
pub mod http_client;
pub mod logging;
pub mod parsing;
pub mod parsing_error;

pub use config::{AppConfig, ConfigManager, ConfigSource};
pub use http_client::HttpClient;
pub use logging::init_logging_with_config;
pub use parsing::{ForecastParser, MovieListParser, ParsingConfig, ParsingError, ParsingResult};
