//! Repository trait for click recording and earnings aggregation.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Total click volume and earnings for a single link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickTotals {
    pub total_clicks: i64,
    pub total_earnings: f64,
}

/// Earnings accumulated in one calendar-month bucket.
///
/// Buckets are keyed by `(year, month)`, so two Januaries in different years
/// are distinct. A month surfaces as soon as it has at least one click, even
/// if every click in it was invalid and the sum is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyEarnings {
    pub year: i32,
    pub month: u32,
    pub earnings: f64,
}

/// Repository interface for click tracking and statistics.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`, in-memory variant in `tests/common`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Records a new click, stamped with the current time by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors; callers on the
    /// redirect path log and discard the failure.
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Returns total click count and summed earnings for a link.
    ///
    /// A link with no clicks yields zero totals.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn link_totals(&self, link_id: i64) -> Result<ClickTotals, AppError>;

    /// Returns per-month earnings for a link, ordered ascending by
    /// `(year, month)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn monthly_breakdown(&self, link_id: i64) -> Result<Vec<MonthlyEarnings>, AppError>;
}
