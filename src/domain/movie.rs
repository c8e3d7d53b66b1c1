use serde::{Deserialize, Serialize};

/// One qualifying title from a catalog search page.
///
/// Built once per container that carries a metascore badge and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub year: u16,
    pub rating: f64,
    pub metascore: u32,
    pub votes: u64,
    /// `rating * 10`, putting the IMDB rating on the metascore scale.
    pub derived_rating: f64,
}

impl MovieRecord {
    pub fn new(title: String, year: u16, rating: f64, metascore: u32, votes: u64) -> Self {
        Self {
            title,
            year,
            rating,
            metascore,
            votes,
            derived_rating: normalized_rating(rating),
        }
    }
}

/// Rescale a 0-10 rating onto 0-100.
pub fn normalized_rating(rating: f64) -> f64 {
    rating * 10.0
}

/// Reduce a raw year label such as `(2005)` or `(I) (2005)` to the last
/// four digits of its last run of at least four consecutive digits.
///
/// Digits from separate groups are never joined, so `(1) (205)` has no year.
pub fn reduce_year(raw: &str) -> Option<u16> {
    let run = raw
        .split(|c: char| !c.is_ascii_digit())
        .rfind(|run| run.len() >= 4)?;
    run[run.len() - 4..].parse().ok()
}
