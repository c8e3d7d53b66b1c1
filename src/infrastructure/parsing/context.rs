//! Parsing context for HTML extraction
//!
//! Identifies the page being parsed so that log lines and errors can say
//! which request produced them.

use std::fmt;

/// One catalog search page: a release year and a result page within it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogPageContext {
    pub year: u16,
    pub page: u32,
    /// Expected number of containers per page (for diagnostics only)
    pub expected_containers: usize,
}

impl CatalogPageContext {
    pub fn new(year: u16, page: u32) -> Self {
        use crate::infrastructure::config::defaults::TITLES_PER_PAGE;

        Self {
            year,
            page,
            expected_containers: TITLES_PER_PAGE,
        }
    }
}

impl fmt::Display for CatalogPageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "year {} page {}", self.year, self.page)
    }
}

/// The single forecast page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastContext {
    pub source_url: String,
}

impl ForecastContext {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
        }
    }
}
