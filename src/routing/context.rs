//! Per-request attributes that predicates are evaluated against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel for a browser or country that could not be derived
pub const UNKNOWN: &str = "unknown";

/// Attributes of one inbound request
///
/// Built once per resolution attempt by the caller and never mutated by the
/// engine. `browser` is a lowercase token such as `chrome`; `country` is an
/// ISO 3166-1 alpha-2 code. Both fall back to [`UNKNOWN`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub at: DateTime<Utc>,
    pub ip: String,
    pub browser: String,
    pub country: String,
}

impl RequestContext {
    pub fn new(ip: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            at: Utc::now(),
            ip: ip.into(),
            browser: UNKNOWN.to_string(),
            country: country.into(),
        }
    }

    pub fn with_browser(mut self, browser: impl Into<String>) -> Self {
        self.browser = browser.into();
        self
    }

    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.at = at;
        self
    }
}

/// Canonical country code: upper-case ISO alpha-2, with the [`UNKNOWN`]
/// sentinel kept in its lowercase form
pub fn normalize_country(code: &str) -> String {
    let code = code.trim();
    if code.eq_ignore_ascii_case(UNKNOWN) {
        UNKNOWN.to_string()
    } else {
        code.to_ascii_uppercase()
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new(String::new(), UNKNOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_defaults_browser_to_unknown() {
        let ctx = RequestContext::new("1.1.1.1", "US");
        assert_eq!(ctx.ip, "1.1.1.1");
        assert_eq!(ctx.country, "US");
        assert_eq!(ctx.browser, UNKNOWN);
    }

    #[test]
    fn test_default_context_is_fully_unknown() {
        let ctx = RequestContext::default();
        assert_eq!(ctx.country, UNKNOWN);
        assert_eq!(ctx.browser, UNKNOWN);
        assert!(ctx.ip.is_empty());
    }

    #[test]
    fn test_normalize_country_keeps_sentinel() {
        assert_eq!(normalize_country(" us "), "US");
        assert_eq!(normalize_country("Unknown"), UNKNOWN);
        assert_eq!(normalize_country("UNKNOWN"), UNKNOWN);
    }
}
