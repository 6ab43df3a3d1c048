//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ClickService, LinkService, StatsService};

/// Service container cloned into every request handler.
///
/// Services hold trait-object repositories and capabilities, so production
/// (Postgres, random verdicts) and test (in-memory, scripted) wirings build
/// the same state type.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub click_service: Arc<ClickService>,
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        click_service: Arc<ClickService>,
        stats_service: Arc<StatsService>,
    ) -> Self {
        Self {
            link_service,
            click_service,
            stats_service,
        }
    }
}
