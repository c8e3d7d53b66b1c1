//! Ratings & weather scrapers
//!
//! Two independent batch pipelines:
//! - catalog: movie titles with IMDB rating, metascore and votes, paged by
//!   release year, written to `movie_ratings.csv`
//! - forecast: the seven-day forecast for one location, written to
//!   `weather_data.csv`

pub mod application;
pub mod domain;
pub mod infrastructure;
