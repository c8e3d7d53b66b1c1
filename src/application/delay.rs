//! Pauses between outbound requests
//!
//! The catalog run waits a random whole number of seconds after every
//! request. The wait itself goes through [`DelayStrategy`] so that tests can
//! run the loop without sleeping.

use async_trait::async_trait;
use std::ops::RangeInclusive;
use std::time::Duration;
use tracing::trace;

/// How the run waits once a pause length has been chosen
#[async_trait]
pub trait DelayStrategy: Send {
    async fn pause(&mut self, duration: Duration);
}

/// Really sleeps, on the tokio timer
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleep;

#[async_trait]
impl DelayStrategy for TokioSleep {
    async fn pause(&mut self, duration: Duration) {
        trace!("Sleeping {:?}", duration);
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately and remembers what it was asked to wait
#[derive(Debug, Default, Clone)]
pub struct NoDelay {
    pub requested: Vec<Duration>,
}

impl NoDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Duration {
        self.requested.iter().sum()
    }
}

#[async_trait]
impl DelayStrategy for NoDelay {
    async fn pause(&mut self, duration: Duration) {
        self.requested.push(duration);
    }
}

/// Uniformly random whole-second pause lengths over an inclusive range
#[derive(Debug, Clone)]
pub struct RandomDelay {
    seconds: RangeInclusive<u64>,
    rng: fastrand::Rng,
}

impl RandomDelay {
    pub fn new(seconds: RangeInclusive<u64>) -> Self {
        Self {
            seconds,
            rng: fastrand::Rng::new(),
        }
    }

    /// Deterministic sequence, for tests
    pub fn with_seed(seconds: RangeInclusive<u64>, seed: u64) -> Self {
        Self {
            seconds,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn next_delay(&mut self) -> Duration {
        Duration::from_secs(self.rng.u64(self.seconds.clone()))
    }
}
