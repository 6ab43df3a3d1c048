//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened affiliate link.
///
/// Maps a globally unique short code to its target URL. Links are immutable
/// once created and are never deleted.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, original_url: String, short_code: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// `id` and `created_at` are assigned by the store on insert.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub original_url: String,
    pub short_code: String,
}
