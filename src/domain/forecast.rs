use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digit-run pattern"));

/// Why a temperature label yields no integer value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureValueError {
    /// The label holds no run of digits at all
    NoDigits,
    /// The first digit run does not fit in a `u32`
    OutOfRange,
}

/// One forecast period ("Tonight", "Thursday", ...) from the seven-day block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub period_name: String,
    pub short_description: String,
    /// Raw temperature label, e.g. `High: 68 °F`.
    pub temperature_text: String,
    pub icon_description: String,
    pub temperature_value: u32,
    pub is_night: bool,
}

impl ForecastRecord {
    /// Assemble a record and derive its two computed columns.
    ///
    /// Fails when `temperature_text` has no usable first run of digits.
    pub fn derive(
        period_name: String,
        short_description: String,
        temperature_text: String,
        icon_description: String,
    ) -> Result<Self, TemperatureValueError> {
        let temperature_value = temperature_value(&temperature_text)?;
        let is_night = is_night(&temperature_text);
        Ok(Self {
            period_name,
            short_description,
            temperature_text,
            icon_description,
            temperature_value,
            is_night,
        })
    }
}

/// The first contiguous run of ASCII digits.
pub fn first_digit_run(text: &str) -> Option<&str> {
    DIGIT_RUN.find(text).map(|m| m.as_str())
}

/// Integer value of the first digit run.
pub fn temperature_value(text: &str) -> Result<u32, TemperatureValueError> {
    first_digit_run(text)
        .ok_or(TemperatureValueError::NoDigits)?
        .parse()
        .map_err(|_| TemperatureValueError::OutOfRange)
}

/// Night periods are labelled `Low: ..`; the test is case-sensitive.
pub fn is_night(temperature_text: &str) -> bool {
    temperature_text.contains("Low")
}
