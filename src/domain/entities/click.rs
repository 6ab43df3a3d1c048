//! Click entity representing a single validated visit.

use chrono::{DateTime, Utc};

/// Earnings attributed to a single valid click.
pub const EARNINGS_PER_VALID_CLICK: f64 = 0.05;

/// A recorded visit through a short code.
///
/// Carries the fraud-validation verdict and the earnings attributed to the
/// visit. Invariant: invalid clicks always carry zero earnings.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub is_valid: bool,
    pub earnings: f64,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(
        id: i64,
        link_id: i64,
        clicked_at: DateTime<Utc>,
        is_valid: bool,
        earnings: f64,
    ) -> Self {
        Self {
            id,
            link_id,
            clicked_at,
            is_valid,
            earnings,
        }
    }
}

/// Input data for recording a new click.
///
/// The timestamp is assigned by the store at insert time. [`NewClick::from_verdict`]
/// is the only construction path, which keeps the earnings/validity invariant
/// in one place.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
    pub is_valid: bool,
    pub earnings: f64,
}

impl NewClick {
    /// Builds a click record from a validation verdict.
    ///
    /// Valid clicks earn [`EARNINGS_PER_VALID_CLICK`]; invalid clicks earn nothing.
    pub fn from_verdict(link_id: i64, is_valid: bool) -> Self {
        Self {
            link_id,
            is_valid,
            earnings: if is_valid { EARNINGS_PER_VALID_CLICK } else { 0.0 },
        }
    }
}
