//! Domain module - scraped records and their derived columns
//!
//! Everything here is plain data and pure functions; fetching and parsing
//! live in the infrastructure layer.

pub mod forecast;
pub mod movie;
pub mod request_counter;

pub use forecast::{ForecastRecord, TemperatureValueError};
pub use movie::MovieRecord;
pub use request_counter::RequestCounter;
