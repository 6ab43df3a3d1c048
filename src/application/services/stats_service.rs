//! Per-link earnings aggregation.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::{LinkRepository, MonthlyEarnings, StatsRepository};
use crate::error::AppError;
use tracing::warn;

/// Aggregated analytics for a single link.
#[derive(Debug, Clone)]
pub struct LinkReport {
    pub url: String,
    pub total_clicks: i64,
    pub total_earnings: f64,
    pub monthly_breakdown: Vec<MonthlyEarnings>,
}

/// Service computing click analytics for paged link listings.
///
/// Reports are always computed fresh from committed store state; nothing is
/// cached, so repeated aggregation with no new clicks is idempotent.
pub struct StatsService {
    links: Arc<dyn LinkRepository>,
    stats: Arc<dyn StatsRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(links: Arc<dyn LinkRepository>, stats: Arc<dyn StatsRepository>) -> Self {
        Self { links, stats }
    }

    /// Aggregates analytics for one page of links.
    ///
    /// An offset past the last link yields an empty page. If aggregation
    /// fails for one link, that link is skipped (logged at `warn`) and the
    /// rest of the page is still produced.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only if listing the page itself fails.
    pub async fn page_report(&self, offset: i64, limit: i64) -> Result<Vec<LinkReport>, AppError> {
        let links = self.links.list(offset, limit).await?;

        let mut reports = Vec::with_capacity(links.len());
        for link in links {
            match self.report_for_link(&link).await {
                Ok(report) => reports.push(report),
                Err(e) => {
                    warn!(link_id = link.id, error = %e, "skipping link in stats page");
                }
            }
        }

        Ok(reports)
    }

    /// Aggregates totals and the monthly breakdown for one link.
    ///
    /// The breakdown has one bucket per calendar `(year, month)` with at
    /// least one click, ordered chronologically ascending. Months whose
    /// clicks were all invalid still surface, with zero earnings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn report_for_link(&self, link: &Link) -> Result<LinkReport, AppError> {
        let totals = self.stats.link_totals(link.id).await?;
        let monthly_breakdown = self.stats.monthly_breakdown(link.id).await?;

        Ok(LinkReport {
            url: link.original_url.clone(),
            total_clicks: totals.total_clicks,
            total_earnings: totals.total_earnings,
            monthly_breakdown,
        })
    }
}
