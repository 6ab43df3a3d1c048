//! Target URL acceptance policy.
//!
//! Only URLs pointing at the configured affiliate domain may be shortened.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;

/// Maximum accepted target URL length.
pub const MAX_URL_LENGTH: usize = 2048;

/// Affiliate domain accepted by default.
pub const DEFAULT_AFFILIATE_DOMAIN: &str = "fiverr.com";

/// Compiled acceptance rules for target URLs.
///
/// A URL is accepted when it is non-empty, within [`MAX_URL_LENGTH`],
/// contains the affiliate domain, and matches the shape
/// `(https?://)?(www.)?(sub.)*domain(/path)?`.
#[derive(Debug, Clone)]
pub struct UrlPolicy {
    domain: String,
    pattern: Regex,
}

impl UrlPolicy {
    /// Compiles the policy for an affiliate domain.
    ///
    /// # Panics
    ///
    /// Panics if the domain produces an invalid pattern; domains come from
    /// validated configuration, so this only fires on programmer error.
    pub fn new(domain: &str) -> Self {
        let escaped = regex::escape(domain);
        let pattern = Regex::new(&format!(
            r"^(https?://)?(www\.)?([A-Za-z0-9-]+\.)*{escaped}(/.*)?$"
        ))
        .expect("affiliate domain must compile into a valid pattern");

        Self {
            domain: domain.to_string(),
            pattern,
        }
    }

    /// Checks a target URL against the policy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the violated rule.
    pub fn check(&self, url: &str) -> Result<(), AppError> {
        if url.is_empty() {
            return Err(AppError::validation("URL must not be empty", json!({})));
        }

        if url.len() > MAX_URL_LENGTH {
            return Err(AppError::validation(
                "URL is too long",
                json!({ "max_length": MAX_URL_LENGTH, "provided_length": url.len() }),
            ));
        }

        if !url.contains(&self.domain) {
            return Err(AppError::validation(
                "URL must point at the affiliate domain",
                json!({ "domain": self.domain }),
            ));
        }

        if !self.pattern.is_match(url) {
            return Err(AppError::validation(
                "URL does not match the accepted format",
                json!({ "domain": self.domain }),
            ));
        }

        Ok(())
    }
}

impl Default for UrlPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_AFFILIATE_DOMAIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> UrlPolicy {
        UrlPolicy::default()
    }

    #[test]
    fn test_accepts_plain_domain() {
        assert!(policy().check("https://www.fiverr.com").is_ok());
    }

    #[test]
    fn test_accepts_path() {
        assert!(policy()
            .check("https://www.fiverr.com/test/docker-test")
            .is_ok());
    }

    #[test]
    fn test_accepts_missing_scheme() {
        assert!(policy().check("www.fiverr.com/seller/gig").is_ok());
        assert!(policy().check("fiverr.com/seller/gig").is_ok());
    }

    #[test]
    fn test_accepts_subdomain() {
        assert!(policy().check("https://pro.fiverr.com/categories").is_ok());
    }

    #[test]
    fn test_accepts_http_scheme() {
        assert!(policy().check("http://fiverr.com/x").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        let err = policy().check("").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_rejects_foreign_domain() {
        let err = policy().check("https://www.example.com").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_rejects_lookalike_domain() {
        // Contains the domain as a substring but at the wrong position.
        let err = policy().check("https://fiverr.com.evil.io/x").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_rejects_over_length() {
        let url = format!("https://www.fiverr.com/{}", "x".repeat(2050));
        let err = policy().check(&url).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_rejects_unsupported_scheme() {
        let err = policy().check("ftp://fiverr.com/file").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_custom_domain() {
        let policy = UrlPolicy::new("example.org");
        assert!(policy.check("https://www.example.org/page").is_ok());
        assert!(policy.check("https://www.fiverr.com/page").is_err());
    }
}
