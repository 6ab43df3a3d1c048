//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_policy::UrlPolicy;
use serde_json::json;

/// Attempt budget for finding an unused short code.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating and retrieving shortened links.
///
/// Enforces the target URL policy, deduplicates by URL, and allocates unique
/// short codes under collision risk.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    codes: Arc<dyn CodeGenerator>,
    policy: UrlPolicy,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        links: Arc<dyn LinkRepository>,
        codes: Arc<dyn CodeGenerator>,
        policy: UrlPolicy,
    ) -> Self {
        Self {
            links,
            codes,
            policy,
        }
    }

    /// Shortens a target URL, idempotently.
    ///
    /// # Deduplication
    ///
    /// If a link for the exact URL already exists, it is returned as-is;
    /// first writer wins. The check is not atomic with the insert, so two
    /// racing creates for the same URL can still both commit (see DESIGN.md).
    ///
    /// # Code Allocation
    ///
    /// Draws candidate codes and checks them against the store, up to
    /// [`MAX_ATTEMPTS`] times. The pre-check is advisory only: a concurrent
    /// allocator can take the code between check and insert, in which case the
    /// store's unique constraint rejects the insert and the attempt is retried
    /// with a fresh candidate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL violates the acceptance
    /// policy, [`AppError::AllocationExhausted`] if no unique code is found
    /// within the budget, and [`AppError::Internal`] on store errors.
    pub async fn shorten(&self, original_url: String) -> Result<Link, AppError> {
        self.policy.check(&original_url)?;

        if let Some(existing) = self.links.find_by_url(&original_url).await? {
            return Ok(existing);
        }

        for _ in 0..MAX_ATTEMPTS {
            let code = self.codes.generate();

            if self.links.find_by_code(&code).await?.is_some() {
                continue;
            }

            let new_link = NewLink {
                original_url: original_url.clone(),
                short_code: code,
            };

            match self.links.create(new_link).await {
                Ok(link) => return Ok(link),
                // Lost the race for this code; draw another.
                Err(e) if e.is_conflict() => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::allocation_exhausted(
            "Failed to allocate a unique short code",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link carries the code.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.links.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "code": code }))
        })
    }

    /// Counts stored links. Used by the health check as a cheap store ping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.links.count().await
    }
}
