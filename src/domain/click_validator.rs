//! Fraud-validation capability for visits.

use async_trait::async_trait;
use std::time::Duration;

/// Default simulated scoring latency.
pub const DEFAULT_VALIDATION_DELAY: Duration = Duration::from_millis(500);

/// Classifies a single visit as valid or fraudulent.
///
/// The production implementation is a stand-in for a real fraud-scoring
/// model; the trait exists so callers never depend on the concrete verdict
/// source and tests can swap in a deterministic one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickValidator: Send + Sync {
    /// Produces a validity verdict for one visit.
    ///
    /// This is the system's designed suspension point: implementations may
    /// sleep, but must do so cooperatively so concurrent visits never
    /// serialize on each other.
    async fn classify(&self) -> bool;
}

/// Simulated fraud scorer: a uniform 50/50 verdict after a fixed delay.
pub struct RandomClickValidator {
    delay: Duration,
}

impl RandomClickValidator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for RandomClickValidator {
    fn default() -> Self {
        Self::new(DEFAULT_VALIDATION_DELAY)
    }
}

#[async_trait]
impl ClickValidator for RandomClickValidator {
    async fn classify(&self) -> bool {
        tokio::time::sleep(self.delay).await;
        rand::random::<bool>()
    }
}
