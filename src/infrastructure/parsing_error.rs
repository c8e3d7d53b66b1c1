//! Parsing error types for catalog and forecast extraction
//!
//! Every variant is fatal to the run that raised it; the scrapers have no
//! partial-result mode.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    #[error("Required field '{field}' not found in {context}")]
    RequiredFieldMissing { field: String, context: String },

    #[error("Field '{field}' is not a valid {expected}: {raw:?}")]
    InvalidNumber {
        field: String,
        expected: &'static str,
        raw: String,
    },

    #[error("Year label {raw:?} has fewer than four digits")]
    InvalidYear { raw: String },

    #[error("Temperature text {raw:?} contains no digits")]
    TemperatureValueMissing { raw: String },

    #[error("Forecast container '{selector}' not found")]
    ForecastContainerMissing { selector: String },

    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },
}

impl ParsingError {
    /// Create a required field missing error with context
    pub fn required_field_missing(field: &str, context: impl Into<String>) -> Self {
        Self::RequiredFieldMissing {
            field: field.to_string(),
            context: context.into(),
        }
    }

    pub fn invalid_number(field: &str, expected: &'static str, raw: &str) -> Self {
        Self::InvalidNumber {
            field: field.to_string(),
            expected,
            raw: raw.to_string(),
        }
    }

    pub fn invalid_selector(selector: &str, reason: impl ToString) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type ParsingResult<T> = Result<T, ParsingError>;
