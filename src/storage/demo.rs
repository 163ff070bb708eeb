//! Fixture links used for local runs and tests

use super::{Destination, Link, LinkStore};
use tracing::warn;

use crate::errors::{LinkRouterError, Result};
use crate::routing::Predicate;

/// `go` (default only), `google` (country/browser split) and `example`
/// (country split without default)
pub fn demo_links() -> Vec<Link> {
    let go = Link::new("1", "go")
        .with_default(Destination::fallback("1-default", "https://golang.com/"));

    let google = Link::new("2", "google")
        .with_destination(Destination::new(
            "2-us",
            "https://google.com/",
            Some(Predicate::country_equals("US")),
            1,
        ))
        .with_destination(Destination::new(
            "2-in",
            "https://google.co.in/",
            Some(Predicate::country_equals("IN")),
            1,
        ))
        .with_destination(Destination::new(
            "2-safari",
            "https://appleNotFound.com/",
            Some(Predicate::browser_in(["safari"])),
            2,
        ));

    let example = Link::new("3", "example")
        .with_destination(Destination::new(
            "3-us",
            "https://example.com/",
            Some(Predicate::country_equals("US")),
            1,
        ))
        .with_destination(Destination::new(
            "3-in",
            "https://example.in/",
            Some(Predicate::country_equals("IN")),
            1,
        ));

    vec![go, google, example]
}

/// Save the demo links whose ids are not present yet, returning how many
/// were added
pub fn seed(store: &dyn LinkStore) -> Result<usize> {
    let mut added = 0;
    for link in demo_links() {
        if store.get_link_by_id(&link.id).is_ok() {
            continue;
        }
        match store.save_link(link) {
            Ok(()) => added += 1,
            Err(LinkRouterError::ShortCodeConflict(msg)) => warn!("Skipping demo link: {}", msg),
            Err(e) => return Err(e),
        }
    }
    Ok(added)
}
