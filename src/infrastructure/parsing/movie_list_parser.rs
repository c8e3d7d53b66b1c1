//! Catalog search page parser
//!
//! Walks the title containers of one search results page. A container
//! only yields a record when it carries a metascore badge; containers
//! without one are dropped silently. Once the badge is present every field
//! is required, and a value that fails to parse aborts the page.

use super::config::CatalogSelectors;
use super::{
    CatalogPageContext, ContextualParser, ParsingError, ParsingResult, compile_selector,
    first_attr, first_text,
};
use crate::domain::movie::{MovieRecord, reduce_year};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// Records pulled from one page, plus how many containers were looked at
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPageExtract {
    pub containers: usize,
    pub records: Vec<MovieRecord>,
}

impl CatalogPageExtract {
    /// Containers dropped for lacking a metascore badge
    pub fn skipped(&self) -> usize {
        self.containers - self.records.len()
    }
}

/// Parser for catalog search result pages
pub struct MovieListParser {
    container: Selector,
    metascore_badge: Selector,
    title: Selector,
    year: Selector,
    rating: Selector,
    metascore: Selector,
    votes: Selector,
    votes_attr: String,
}

impl MovieListParser {
    /// Create a parser with the default selectors
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&CatalogSelectors::default())
    }

    /// Create parser with custom selector configuration
    pub fn with_config(selectors: &CatalogSelectors) -> ParsingResult<Self> {
        Ok(Self {
            container: compile_selector(&selectors.container)?,
            metascore_badge: compile_selector(&selectors.metascore_badge)?,
            title: compile_selector(&selectors.title)?,
            year: compile_selector(&selectors.year)?,
            rating: compile_selector(&selectors.rating)?,
            metascore: compile_selector(&selectors.metascore)?,
            votes: compile_selector(&selectors.votes)?,
            votes_attr: selectors.votes_attr.clone(),
        })
    }

    fn has_metascore(&self, container: &ElementRef) -> bool {
        container.select(&self.metascore_badge).next().is_some()
    }

    fn extract_record(
        &self,
        container: &ElementRef,
        index: usize,
        context: &CatalogPageContext,
    ) -> ParsingResult<MovieRecord> {
        let location = format!("container {index} ({context})");
        let required = |selector: &Selector, field: &str| {
            first_text(container, selector)
                .ok_or_else(|| ParsingError::required_field_missing(field, location.clone()))
        };

        let title = required(&self.title, "title")?;

        let raw_year = required(&self.year, "year")?;
        let year = reduce_year(&raw_year).ok_or(ParsingError::InvalidYear { raw: raw_year })?;

        let raw_rating = required(&self.rating, "rating")?;
        let rating = raw_rating
            .parse::<f64>()
            .map_err(|_| ParsingError::invalid_number("rating", "float", &raw_rating))?;

        let raw_metascore = required(&self.metascore, "metascore")?;
        let metascore = raw_metascore
            .parse::<u32>()
            .map_err(|_| ParsingError::invalid_number("metascore", "integer", &raw_metascore))?;

        let raw_votes = first_attr(container, &self.votes, &self.votes_attr)
            .ok_or_else(|| ParsingError::required_field_missing("votes", location.clone()))?;
        let votes = raw_votes
            .parse::<u64>()
            .map_err(|_| ParsingError::invalid_number("votes", "integer", &raw_votes))?;

        Ok(MovieRecord::new(title, year, rating, metascore, votes))
    }
}

impl ContextualParser for MovieListParser {
    type Output = CatalogPageExtract;
    type Context = CatalogPageContext;

    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output> {
        let containers: Vec<ElementRef> = html.select(&self.container).collect();

        if containers.len() != context.expected_containers {
            debug!(
                "Found {} containers on {}, expected {}",
                containers.len(),
                context,
                context.expected_containers
            );
        }
        if containers.is_empty() {
            warn!("No title containers found on {}", context);
        }

        let mut records = Vec::new();
        for (index, container) in containers.iter().enumerate() {
            if !self.has_metascore(container) {
                continue;
            }
            records.push(self.extract_record(container, index, context)?);
        }

        let extract = CatalogPageExtract {
            containers: containers.len(),
            records,
        };
        debug!(
            "Extracted {} titles from {} ({} without metascore)",
            extract.records.len(),
            context,
            extract.skipped()
        );
        Ok(extract)
    }
}
