//! Visit validation and best-effort click recording.

use std::sync::Arc;

use crate::domain::click_validator::ClickValidator;
use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;
use tracing::warn;

/// Service that turns a visit into a persisted click record.
///
/// Recording is best-effort by contract: the redirect must never wait on it
/// or fail because of it. Handlers run [`ClickService::track_visit`] in a
/// detached task and the service itself only logs persistence failures.
pub struct ClickService {
    validator: Arc<dyn ClickValidator>,
    stats: Arc<dyn StatsRepository>,
}

impl ClickService {
    /// Creates a new click service.
    pub fn new(validator: Arc<dyn ClickValidator>, stats: Arc<dyn StatsRepository>) -> Self {
        Self { validator, stats }
    }

    /// Validates one visit and records the outcome.
    ///
    /// Awaits the validator's verdict (the system's one designed suspension
    /// point), then persists a click earning 0.05 when valid and 0.0
    /// otherwise. No store session is held while the validator runs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if persistence fails. The error is a
    /// value, not an exception: callers on the redirect path discard it via
    /// [`ClickService::track_visit_detached`].
    pub async fn track_visit(&self, link_id: i64) -> Result<Click, AppError> {
        let is_valid = self.validator.classify().await;

        self.stats
            .record_click(NewClick::from_verdict(link_id, is_valid))
            .await
    }

    /// Spawns visit tracking decoupled from the caller's lifetime.
    ///
    /// The task keeps running even if the originating request is abandoned;
    /// failures are logged and swallowed.
    pub fn track_visit_detached(self: &Arc<Self>, link_id: i64) {
        let service = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(e) = service.track_visit(link_id).await {
                warn!(link_id, error = %e, "failed to record click");
            }
        });
    }
}
