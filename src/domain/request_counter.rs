use std::time::{Duration, Instant};

/// Counts outbound fetch attempts for one catalog run.
///
/// Owned by the run that creates it and dropped with it; nothing here is
/// persisted.
#[derive(Debug, Clone)]
pub struct RequestCounter {
    requests: u32,
    started_at: Instant,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(started_at: Instant) -> Self {
        Self {
            requests: 0,
            started_at,
        }
    }

    /// Record one attempt, successful or not, and return the new total.
    pub fn record_attempt(&mut self) -> u32 {
        self.requests += 1;
        self.requests
    }

    pub fn requests(&self) -> u32 {
        self.requests
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Requests per second over `elapsed`.
    pub fn rate_over(&self, elapsed: Duration) -> f64 {
        let seconds = elapsed.as_secs_f64();
        if seconds <= 0.0 {
            return 0.0;
        }
        f64::from(self.requests) / seconds
    }

    pub fn rate(&self) -> f64 {
        self.rate_over(self.elapsed())
    }

    /// True once the count is strictly past `ceiling`.
    pub fn exceeds(&self, ceiling: u32) -> bool {
        self.requests > ceiling
    }

    /// `Request:<n>; Frequency: <rate> requests/s`
    pub fn progress_line(&self) -> String {
        format!(
            "Request:{}; Frequency: {} requests/s",
            self.requests,
            self.rate()
        )
    }
}

impl Default for RequestCounter {
    fn default() -> Self {
        Self::new()
    }
}
