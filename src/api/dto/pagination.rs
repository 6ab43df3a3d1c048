//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

/// Default page size for stats listings.
const DEFAULT_LIMIT: u32 = 10;
/// Upper bound on requested page size.
const MAX_LIMIT: u32 = 100;

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PaginationParams {
    /// Validates pagination parameters and converts to database offset/limit.
    ///
    /// # Defaults
    ///
    /// - `page`: 1 (1-based)
    /// - `limit`: 10
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Limit must be between 1 and 100
    ///
    /// Out-of-range pages are not validated here: an offset past the last
    /// row simply yields an empty page downstream.
    ///
    /// # Returns
    ///
    /// `(offset, limit)` tuple for SQL queries, `offset = (page - 1) * limit`.
    pub fn into_offset_limit(&self) -> Result<(i64, i64), String> {
        let page = self.page.unwrap_or(1);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(format!("Limit must be between 1 and {MAX_LIMIT}"));
        }

        let offset = (page as i64 - 1) * limit as i64;

        Ok((offset, limit as i64))
    }
}
