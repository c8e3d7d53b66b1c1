//! Seven-day forecast parser
//!
//! Reads the four fields of each period from the period's own container in
//! a single pass, so the columns cannot drift out of step with each other.

use super::config::ForecastSelectors;
use super::{
    ContextualParser, ForecastContext, ParsingError, ParsingResult, compile_selector, first_attr,
    first_text,
};
use crate::domain::forecast::{ForecastRecord, TemperatureValueError, first_digit_run};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Parser for the forecast page
pub struct ForecastParser {
    forecast_selector: String,
    forecast: Selector,
    period: Selector,
    period_name: Selector,
    short_desc: Selector,
    temp: Selector,
    icon: Selector,
    icon_attr: String,
}

impl ForecastParser {
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&ForecastSelectors::default())
    }

    pub fn with_config(selectors: &ForecastSelectors) -> ParsingResult<Self> {
        Ok(Self {
            forecast_selector: selectors.forecast.clone(),
            forecast: compile_selector(&selectors.forecast)?,
            period: compile_selector(&selectors.period)?,
            period_name: compile_selector(&selectors.period_name)?,
            short_desc: compile_selector(&selectors.short_desc)?,
            temp: compile_selector(&selectors.temp)?,
            icon: compile_selector(&selectors.icon)?,
            icon_attr: selectors.icon_attr.clone(),
        })
    }

    fn extract_period(&self, period: &ElementRef, index: usize) -> ParsingResult<ForecastRecord> {
        let location = format!("forecast period {index}");
        let missing = |field: &str| ParsingError::required_field_missing(field, location.clone());

        let period_name = first_text(period, &self.period_name).ok_or_else(|| missing("period"))?;
        let short_desc = first_text(period, &self.short_desc).ok_or_else(|| missing("short_desc"))?;
        let temp = first_text(period, &self.temp).ok_or_else(|| missing("temp"))?;
        let desc = first_attr(period, &self.icon, &self.icon_attr).ok_or_else(|| missing("desc"))?;

        ForecastRecord::derive(period_name, short_desc, temp.clone(), desc).map_err(|e| match e {
            TemperatureValueError::NoDigits => ParsingError::TemperatureValueMissing { raw: temp.clone() },
            TemperatureValueError::OutOfRange => {
                ParsingError::invalid_number("temp", "integer", first_digit_run(&temp).unwrap_or(&temp))
            }
        })
    }
}

impl ContextualParser for ForecastParser {
    type Output = Vec<ForecastRecord>;
    type Context = ForecastContext;

    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output> {
        let forecast = html.select(&self.forecast).next().ok_or_else(|| {
            ParsingError::ForecastContainerMissing {
                selector: self.forecast_selector.clone(),
            }
        })?;

        let records = forecast
            .select(&self.period)
            .enumerate()
            .map(|(index, period)| self.extract_period(&period, index))
            .collect::<ParsingResult<Vec<_>>>()?;

        debug!("Extracted {} forecast periods from {}", records.len(), context.source_url);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(name: &str, short: &str, temp: &str, title: &str) -> String {
        format!(
            r#"<li class="forecast-tombstone">
                 <div class="tombstone-container">
                   <p class="period-name">{name}</p>
                   <p><img src="newimages/medium/sct.png" alt="{title}" title="{title}" class="forecast-icon"></p>
                   <p class="short-desc">{short}</p>
                   <p class="temp temp-high">{temp}</p>
                 </div>
               </li>"#
        )
    }

    fn page(periods: &[String]) -> String {
        format!(
            r#"<html><body>
                 <div id="seven-day-forecast" class="panel panel-default">
                   <div id="seven-day-forecast-body" class="panel-body">
                     <ul id="seven-day-forecast-list" class="list-unstyled">{}</ul>
                   </div>
                 </div>
               </body></html>"#,
            periods.concat()
        )
    }

    fn parse(markup: &str) -> ParsingResult<Vec<ForecastRecord>> {
        ForecastParser::new()
            .unwrap()
            .parse_str(markup, &ForecastContext::new("fixture"))
    }

    #[test]
    fn test_extracts_periods_in_document_order() {
        let markup = page(&[
            period("Tonight", "Mostly Clear", "Low: 49 °F", "Tonight: Mostly clear, with a low around 49."),
            period("Thursday", "Sunny", "High: 63 °F", "Thursday: Sunny, with a high near 63."),
        ]);
        let records = parse(&markup).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].period_name, "Tonight");
        assert_eq!(records[0].temperature_value, 49);
        assert!(records[0].is_night);
        assert_eq!(records[1].short_description, "Sunny");
        assert_eq!(records[1].icon_description, "Thursday: Sunny, with a high near 63.");
        assert!(!records[1].is_night);
    }

    #[test]
    fn test_line_breaks_collapse_like_get_text() {
        let markup = page(&[period("This<br>Afternoon", "Partly<br>Sunny", "High: 68 °F", "x")]);
        let records = parse(&markup).unwrap();
        assert_eq!(records[0].period_name, "ThisAfternoon");
        assert_eq!(records[0].short_description, "PartlySunny");
    }

    #[test]
    fn test_period_missing_a_field_is_an_error() {
        let broken = r#"<li><div class="tombstone-container"><p class="period-name">Friday</p>
                        <p class="short-desc">Rain</p><p class="temp">High: 55 °F</p></div></li>"#;
        let markup = page(&[period("Tonight", "Clear", "Low: 49 °F", "t"), broken.to_string()]);
        let err = parse(&markup).unwrap_err();
        assert_eq!(err, ParsingError::required_field_missing("desc", "forecast period 1"));
    }

    #[test]
    fn test_temperature_without_digits_is_an_error() {
        let markup = page(&[period("Tonight", "Clear", "Low: -- °F", "t")]);
        assert_eq!(
            parse(&markup).unwrap_err(),
            ParsingError::TemperatureValueMissing {
                raw: "Low: -- °F".to_string()
            }
        );
    }

    #[test]
    fn test_oversized_temperature_is_an_invalid_number() {
        let markup = page(&[period("Tonight", "Clear", "Low: 99999999999 °F", "t")]);
        assert_eq!(
            parse(&markup).unwrap_err(),
            ParsingError::invalid_number("temp", "integer", "99999999999")
        );
    }

    #[test]
    fn test_icon_title_is_kept_verbatim() {
        let markup = page(&[period("Tonight", "Clear", "Low: 49 °F", " Tonight: Clear. ")]);
        assert_eq!(parse(&markup).unwrap()[0].icon_description, " Tonight: Clear. ");
    }

    #[test]
    fn test_missing_forecast_block_is_an_error() {
        let err = parse("<html><body><p>Service unavailable</p></body></html>").unwrap_err();
        assert!(matches!(err, ParsingError::ForecastContainerMissing { .. }));
    }
}
