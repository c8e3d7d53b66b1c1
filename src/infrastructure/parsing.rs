//! HTML parsing infrastructure
//!
//! Trait-based extraction over `scraper` documents. Selectors are plain
//! strings in [`ParsingConfig`] and are compiled once per parser.

pub mod config;
pub mod context;
pub mod error;
pub mod forecast_parser;
pub mod movie_list_parser;

pub use config::{CatalogSelectors, ForecastSelectors, ParsingConfig};
pub use context::{CatalogPageContext, ForecastContext};
pub use error::{ParsingError, ParsingResult};
pub use forecast_parser::ForecastParser;
pub use movie_list_parser::{CatalogPageExtract, MovieListParser};

use scraper::{ElementRef, Html, Selector};

/// Parser that needs information about where the document came from
pub trait ContextualParser {
    type Output;
    type Context;

    /// Parse a document with contextual information
    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output>;

    /// Parse raw markup
    fn parse_str(&self, markup: &str, context: &Self::Context) -> ParsingResult<Self::Output> {
        let html = Html::parse_document(markup);
        self.parse_with_context(&html, context)
    }
}

/// Compile one selector string
pub fn compile_selector(selector: &str) -> ParsingResult<Selector> {
    Selector::parse(selector).map_err(|e| ParsingError::invalid_selector(selector, e))
}

/// All descendant text joined with no separator, then trimmed
pub fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the first match of `selector` under `element`
pub fn first_text(element: &ElementRef, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(|e| element_text(&e))
}

/// Attribute of the first match of `selector` under `element`, as written
pub fn first_attr(element: &ElementRef, selector: &Selector, attr: &str) -> Option<String> {
    element
        .select(selector)
        .next()
        .and_then(|e| e.value().attr(attr))
        .map(str::to_string)
}
