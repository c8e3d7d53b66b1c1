//! Parsing configuration for HTML extraction
//!
//! Centralized CSS selectors for both scraped sites.

use serde::{Deserialize, Serialize};

/// Main parsing configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Catalog search page selectors
    pub catalog: CatalogSelectors,

    /// Forecast page selectors
    pub forecast: ForecastSelectors,
}

/// CSS selectors for catalog search pages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSelectors {
    /// One block per listed title
    pub container: String,

    /// Gating element: containers without it are skipped
    pub metascore_badge: String,

    pub title: String,

    /// Year label, e.g. `(2005)` or `(I) (2005)`
    pub year: String,

    /// First match holds the IMDB rating
    pub rating: String,

    pub metascore: String,

    /// Element carrying the vote count in an attribute
    pub votes: String,

    pub votes_attr: String,
}

impl Default for CatalogSelectors {
    fn default() -> Self {
        Self {
            container: "div.lister-item.mode-advanced".to_string(),
            metascore_badge: "div.ratings-metascore".to_string(),
            title: "h3 a".to_string(),
            year: "h3 span.lister-item-year".to_string(),
            rating: "strong".to_string(),
            metascore: "span.metascore".to_string(),
            votes: r#"span[name="nv"]"#.to_string(),
            votes_attr: "data-value".to_string(),
        }
    }
}

/// CSS selectors for the seven-day forecast block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastSelectors {
    /// The forecast block as a whole
    pub forecast: String,

    /// One period inside the block
    pub period: String,

    pub period_name: String,

    pub short_desc: String,

    pub temp: String,

    pub icon: String,

    /// Icon attribute holding the long description
    pub icon_attr: String,
}

impl Default for ForecastSelectors {
    fn default() -> Self {
        Self {
            forecast: "#seven-day-forecast".to_string(),
            period: ".tombstone-container".to_string(),
            period_name: ".period-name".to_string(),
            short_desc: ".short-desc".to_string(),
            temp: ".temp".to_string(),
            icon: "img".to_string(),
            icon_attr: "title".to_string(),
        }
    }
}
