//! Rating distributions as text histograms
//!
//! Bins follow numpy's rules: equal-width bins over a closed range, every
//! bin half-open except the last, values outside the range ignored.

use std::fmt::Write as _;
use std::ops::RangeInclusive;

use crate::domain::movie::MovieRecord;

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub title: String,
    pub low: f64,
    pub high: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn new(
        title: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
        bins: usize,
        range: RangeInclusive<f64>,
    ) -> Self {
        let (low, high) = (*range.start(), *range.end());
        let mut counts = vec![0; bins];
        let width = (high - low) / bins as f64;

        for value in values {
            if bins == 0 || !(low..=high).contains(&value) {
                continue;
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let bin = (((value - low) / width) as usize).min(bins - 1);
            counts[bin] += 1;
        }

        Self {
            title: title.into(),
            low,
            high,
            counts,
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Lower and upper edge of bin `index`
    pub fn edges(&self, index: usize) -> (f64, f64) {
        let width = (self.high - self.low) / self.counts.len() as f64;
        let start = self.low + width * index as f64;
        (start, start + width)
    }

    pub fn render(&self) -> String {
        let mut out = format!("{} ({} titles)\n", self.title, self.total());
        let peak = self.counts.iter().copied().max().unwrap_or(0).max(1);
        for (index, count) in self.counts.iter().enumerate() {
            let (start, end) = self.edges(index);
            let bar = "#".repeat(count * BAR_WIDTH / peak);
            let _ = writeln!(out, "{start:>6.1} - {end:<6.1} | {bar} {count}");
        }
        out
    }
}

/// The three catalog histograms: IMDB rating, metascore, and the two on a
/// shared 0-100 scale
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionReport {
    pub imdb: Histogram,
    pub metascore: Histogram,
    pub normalized_imdb: Histogram,
    pub normalized_metascore: Histogram,
}

impl DistributionReport {
    pub fn from_records(records: &[MovieRecord]) -> Self {
        let metascores = || records.iter().map(|r| f64::from(r.metascore));
        Self {
            imdb: Histogram::new("IMDB rating", records.iter().map(|r| r.rating), 10, 0.0..=10.0),
            metascore: Histogram::new("Metascore", metascores(), 10, 0.0..=100.0),
            normalized_imdb: Histogram::new(
                "n_imdb",
                records.iter().map(|r| r.derived_rating),
                10,
                0.0..=100.0,
            ),
            normalized_metascore: Histogram::new("metascore", metascores(), 10, 0.0..=100.0),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.imdb.render());
        out.push('\n');
        out.push_str(&self.metascore.render());
        out.push('\n');
        out.push_str("The Two Normalized Distributions\n");
        for index in 0..self.normalized_imdb.counts.len() {
            let (start, end) = self.normalized_imdb.edges(index);
            let _ = writeln!(
                out,
                "{start:>6.1} - {end:<6.1} | n_imdb {:>5}  metascore {:>5}",
                self.normalized_imdb.counts[index], self.normalized_metascore.counts[index]
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binning_matches_numpy_edges() {
        let histogram = Histogram::new("t", [0.0, 0.99, 1.0, 5.5, 9.99, 10.0], 10, 0.0..=10.0);
        assert_eq!(histogram.counts, vec![2, 1, 0, 0, 0, 1, 0, 0, 0, 2]);
    }

    #[test]
    fn test_out_of_range_values_are_dropped() {
        let histogram = Histogram::new("t", [-1.0, 50.0, 100.0, 100.5, f64::NAN], 10, 0.0..=100.0);
        assert_eq!(histogram.total(), 2);
        assert_eq!(histogram.counts[5], 1);
        assert_eq!(histogram.counts[9], 1);
    }

    #[test]
    fn test_report_from_records() {
        let records = vec![
            MovieRecord::new("A".to_string(), 2000, 7.5, 65, 1),
            MovieRecord::new("B".to_string(), 2000, 7.5, 65, 1),
            MovieRecord::new("C".to_string(), 2001, 3.2, 20, 1),
        ];
        let report = DistributionReport::from_records(&records);
        assert_eq!(report.imdb.counts[7], 2);
        assert_eq!(report.imdb.counts[3], 1);
        assert_eq!(report.metascore.counts[6], 2);
        assert_eq!(report.normalized_imdb.counts[7], 2);
        assert_eq!(report.normalized_metascore, Histogram { title: "metascore".to_string(), ..report.metascore.clone() });

        let text = report.render();
        assert!(text.contains("IMDB rating (3 titles)"));
        assert!(text.contains("Metascore (3 titles)"));
        assert!(text.contains("The Two Normalized Distributions"));
    }

    #[test]
    fn test_render_empty() {
        let text = Histogram::new("Empty", Vec::new(), 10, 0.0..=10.0).render();
        assert_eq!(text.lines().count(), 11);
    }
}
