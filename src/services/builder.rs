//! Link construction from creation payloads
//!
//! A payload looks like
//!
//! ```json
//! {
//!   "short": "promo",
//!   "default_url": "https://example.org/",
//!   "destinations": [
//!     { "url": "https://example.in/", "priority": 2,
//!       "condition": { "type": "CountryEquals", "country": "IN" } },
//!     { "url": "https://example.com/mobile", "priority": 1,
//!       "condition": { "type": "AND", "children": [
//!         { "type": "BrowserIn", "browsers": ["safari", "chrome"] },
//!         { "type": "NOT", "child": { "type": "CountryEquals", "country": "IN" } }
//!       ] } }
//!   ]
//! }
//! ```
//!
//! Any malformed destination aborts the whole build; links are never
//! partially constructed.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{LinkRouterError, Result};
use crate::routing::{Predicate, normalize_country};
use crate::storage::{Destination, Link, normalize_short};
use crate::utils::url_validator::validate_url;
use crate::utils::{IdGenerator, is_valid_short_code};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkPayload {
    /// Public short code; generated when absent
    #[serde(default)]
    pub short: Option<String>,
    /// Unconditional fallback URL
    #[serde(default)]
    pub default_url: Option<String>,
    #[serde(default)]
    pub destinations: Vec<DestinationPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationPayload {
    pub url: String,
    /// Raw predicate tree, parsed by [`LinkBuilder`]
    #[serde(default)]
    pub condition: serde_json::Value,
    pub priority: i64,
}

impl LinkPayload {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| LinkRouterError::validation(format!("invalid link payload: {}", e)))
    }
}

/// Parse a raw condition into a [`Predicate`]
///
/// Unknown `type` tags and missing fields are rejected, as are empty country
/// codes and empty browser tokens. Country codes are upper-cased (except the
/// `unknown` sentinel) and browser tokens lower-cased to match how request
/// contexts are derived.
pub fn parse_condition(raw: &serde_json::Value) -> Result<Predicate> {
    if raw.is_null() {
        return Err(LinkRouterError::malformed_predicate("missing condition"));
    }

    let predicate: Predicate = serde_json::from_value(raw.clone())
        .map_err(|e| LinkRouterError::malformed_predicate(e.to_string()))?;

    let mut problem = None;
    predicate.visit(&mut |node| {
        if problem.is_some() {
            return;
        }
        match node {
            Predicate::CountryEquals { country } if country.trim().is_empty() => {
                problem = Some("CountryEquals requires a non-empty country code".to_string());
            }
            Predicate::BrowserIn { browsers } if browsers.iter().any(|b| b.trim().is_empty()) => {
                problem = Some("BrowserIn contains an empty browser token".to_string());
            }
            _ => {}
        }
    });
    if let Some(problem) = problem {
        return Err(LinkRouterError::malformed_predicate(problem));
    }

    Ok(normalize(predicate))
}

fn normalize(predicate: Predicate) -> Predicate {
    match predicate {
        Predicate::CountryEquals { country } => Predicate::CountryEquals {
            country: normalize_country(&country),
        },
        Predicate::BrowserIn { browsers } => Predicate::BrowserIn {
            browsers: browsers
                .into_iter()
                .map(|b| b.trim().to_lowercase())
                .collect(),
        },
        Predicate::And { children } => Predicate::And {
            children: children.into_iter().map(normalize).collect(),
        },
        Predicate::Or { children } => Predicate::Or {
            children: children.into_iter().map(normalize).collect(),
        },
        Predicate::Not { child } => Predicate::Not {
            child: Box::new(normalize(*child)),
        },
    }
}

/// Assembles [`Link`]s with ids from an injected [`IdGenerator`]
#[derive(Clone)]
pub struct LinkBuilder {
    ids: Arc<dyn IdGenerator>,
}

impl LinkBuilder {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// Build a new link with a fresh id
    pub fn build(&self, payload: LinkPayload) -> Result<Link> {
        let id = self.ids.link_id();
        self.build_with_id(id, payload)
    }

    /// Build a link carrying `id`, used for whole-record replacement
    pub fn build_with_id(&self, id: String, payload: LinkPayload) -> Result<Link> {
        let short = match payload.short.as_deref().map(normalize_short) {
            Some(short) if !short.is_empty() => {
                if !is_valid_short_code(short) {
                    return Err(LinkRouterError::validation(format!(
                        "invalid short code '{}'",
                        short
                    )));
                }
                short.to_string()
            }
            _ => self.ids.short_code(),
        };

        let mut link = Link::new(id, short);

        for (index, destination) in payload.destinations.into_iter().enumerate() {
            validate_url(&destination.url).map_err(|e| {
                LinkRouterError::validation(format!("destination {}: {}", index, e))
            })?;
            let condition = parse_condition(&destination.condition).map_err(|e| {
                LinkRouterError::malformed_predicate(format!(
                    "destination {}: {}",
                    index,
                    e.message()
                ))
            })?;
            link.destinations.push(Destination::new(
                self.ids.destination_id(),
                destination.url.trim(),
                Some(condition),
                destination.priority,
            ));
        }

        if let Some(default_url) = payload.default_url.as_deref().map(str::trim)
            && !default_url.is_empty()
        {
            validate_url(default_url).map_err(|e| {
                LinkRouterError::validation(format!("default destination: {}", e))
            })?;
            link.default_destination =
                Some(Destination::fallback(self.ids.destination_id(), default_url));
        }

        if link.destinations.is_empty() && link.default_destination.is_none() {
            return Err(LinkRouterError::validation(
                "a link needs at least one destination or a default URL",
            ));
        }

        debug!(
            "Built link {} ({}) with {} destinations",
            link.id,
            link.short,
            link.destinations.len()
        );
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::utils::SequentialIdGenerator;

    fn builder() -> LinkBuilder {
        LinkBuilder::new(Arc::new(SequentialIdGenerator::new()))
    }

    fn payload(value: serde_json::Value) -> LinkPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_build_full_payload() {
        let link = builder()
            .build(payload(json!({
                "short": "/promo/",
                "default_url": "https://example.org/",
                "destinations": [
                    { "url": "https://example.in/", "priority": 2,
                      "condition": { "type": "CountryEquals", "country": "in" } },
                    { "url": "https://example.com/", "priority": 1,
                      "condition": { "type": "AND", "children": [
                          { "type": "BrowserIn", "browsers": ["Safari"] }
                      ] } }
                ]
            })))
            .unwrap();

        assert_eq!(link.id, "link-1");
        assert_eq!(link.short, "promo");
        assert!(link.active);
        assert_eq!(link.destinations.len(), 2);
        assert_eq!(
            link.destinations[0].condition,
            Some(Predicate::country_equals("IN"))
        );
        assert_eq!(
            link.destinations[1].condition,
            Some(Predicate::and(vec![Predicate::browser_in(["safari"])]))
        );
        assert_eq!(
            link.default_destination.unwrap().url,
            "https://example.org/"
        );
    }

    #[test]
    fn test_generates_short_code_when_missing() {
        let link = builder()
            .build(payload(json!({ "default_url": "https://golang.com/" })))
            .unwrap();
        assert_eq!(link.short, "s2");
    }

    #[test]
    fn test_unknown_type_aborts_build() {
        let err = builder()
            .build(payload(json!({
                "short": "x",
                "destinations": [
                    { "url": "https://ok.example/", "priority": 1,
                      "condition": { "type": "CountryEquals", "country": "US" } },
                    { "url": "https://bad.example/", "priority": 1,
                      "condition": { "type": "TimeBetween", "from": 1 } }
                ]
            })))
            .unwrap_err();
        assert!(matches!(err, LinkRouterError::MalformedPredicate(_)));
        assert!(err.message().contains("destination 1"), "{}", err);
        assert!(err.message().contains("TimeBetween"), "{}", err);
    }

    #[test]
    fn test_missing_fields_are_malformed() {
        for condition in [
            json!({ "type": "BrowserIn" }),
            json!({ "type": "AND" }),
            json!({ "country": "US" }),
            json!(null),
        ] {
            let err = builder()
                .build(payload(json!({
                    "short": "x",
                    "destinations": [{ "url": "https://a.example/", "priority": 0, "condition": condition }]
                })))
                .unwrap_err();
            assert!(
                matches!(err, LinkRouterError::MalformedPredicate(_)),
                "{:?}",
                err
            );
        }
    }

    #[test]
    fn test_unknown_country_condition_matches_unknown_context() {
        let predicate =
            parse_condition(&json!({ "type": "CountryEquals", "country": "unknown" })).unwrap();
        assert_eq!(predicate, Predicate::country_equals(crate::routing::UNKNOWN));
        assert!(predicate.evaluate(&crate::routing::RequestContext::default()));

        let predicate =
            parse_condition(&json!({ "type": "CountryEquals", "country": "Unknown" })).unwrap();
        assert_eq!(predicate, Predicate::country_equals(crate::routing::UNKNOWN));
    }

    #[test]
    fn test_empty_leaf_values_are_malformed() {
        assert!(parse_condition(&json!({ "type": "CountryEquals", "country": " " })).is_err());
        assert!(
            parse_condition(&json!({ "type": "OR", "children": [
                { "type": "BrowserIn", "browsers": ["chrome", ""] }
            ] }))
            .is_err()
        );
    }

    #[test]
    fn test_invalid_urls_and_shorts() {
        let err = builder()
            .build(payload(json!({
                "short": "x",
                "destinations": [{ "url": "javascript:alert(1)", "priority": 0,
                    "condition": { "type": "OR", "children": [] } }]
            })))
            .unwrap_err();
        assert!(matches!(err, LinkRouterError::Validation(_)));

        let err = builder()
            .build(payload(json!({ "short": "a b", "default_url": "https://a.example/" })))
            .unwrap_err();
        assert!(matches!(err, LinkRouterError::Validation(_)));
    }

    #[test]
    fn test_empty_link_is_rejected() {
        let err = builder().build(LinkPayload::default()).unwrap_err();
        assert!(matches!(err, LinkRouterError::Validation(_)));
    }

    #[test]
    fn test_payload_from_json_reports_structure_errors() {
        let err = LinkPayload::from_json(r#"{"destinations":[{"url":"https://a.example/"}]}"#)
            .unwrap_err();
        assert!(matches!(err, LinkRouterError::Validation(_)));
        assert!(err.message().contains("priority"), "{}", err);
    }
}
