//! CSV export for the scraped tables
//!
//! Both tables are written with a leading, unnamed, 0-based row index
//! column. Floats use their shortest round-trip form (`7.5`, `75.0`) and
//! booleans are written as `True`/`False`.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Serialize, Serializer};
use tracing::info;

use crate::domain::forecast::ForecastRecord;
use crate::domain::movie::MovieRecord;

#[derive(Debug, Serialize)]
struct MovieRow<'a> {
    #[serde(rename = "")]
    index: usize,
    movie: &'a str,
    year: u16,
    imdb: f64,
    metascore: u32,
    votes: u64,
    n_imdb: f64,
}

impl<'a> MovieRow<'a> {
    fn new(index: usize, record: &'a MovieRecord) -> Self {
        Self {
            index,
            movie: &record.title,
            year: record.year,
            imdb: record.rating,
            metascore: record.metascore,
            votes: record.votes,
            n_imdb: record.derived_rating,
        }
    }
}

#[derive(Debug, Serialize)]
struct WeatherRow<'a> {
    #[serde(rename = "")]
    index: usize,
    period: &'a str,
    short_desc: &'a str,
    temp: &'a str,
    desc: &'a str,
    temp_num: u32,
    #[serde(serialize_with = "title_case_bool")]
    is_night: bool,
}

impl<'a> WeatherRow<'a> {
    fn new(index: usize, record: &'a ForecastRecord) -> Self {
        Self {
            index,
            period: &record.period_name,
            short_desc: &record.short_description,
            temp: &record.temperature_text,
            desc: &record.icon_description,
            temp_num: record.temperature_value,
            is_night: record.is_night,
        }
    }
}

fn title_case_bool<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "True" } else { "False" })
}

pub const MOVIE_HEADERS: [&str; 7] = ["", "movie", "year", "imdb", "metascore", "votes", "n_imdb"];
pub const WEATHER_HEADERS: [&str; 7] = ["", "period", "short_desc", "temp", "desc", "temp_num", "is_night"];

/// Write the movie table to any writer
pub fn write_movies<W: Write>(writer: W, records: &[MovieRecord]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    if records.is_empty() {
        csv.write_record(MOVIE_HEADERS)?;
    }
    for (index, record) in records.iter().enumerate() {
        csv.serialize(MovieRow::new(index, record))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the weather table to any writer
pub fn write_forecast<W: Write>(writer: W, records: &[ForecastRecord]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    if records.is_empty() {
        csv.write_record(WEATHER_HEADERS)?;
    }
    for (index, record) in records.iter().enumerate() {
        csv.serialize(WeatherRow::new(index, record))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the movie table to `path`, replacing any existing file
pub fn export_movies(path: &Path, records: &[MovieRecord]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_movies(file, records).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} movie rows to {}", records.len(), path.display());
    Ok(())
}

/// Write the weather table to `path`, replacing any existing file
pub fn export_forecast(path: &Path, records: &[ForecastRecord]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_forecast(file, records).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} forecast rows to {}", records.len(), path.display());
    Ok(())
}
