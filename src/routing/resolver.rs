//! Destination selection for a single link.

use std::cmp::Reverse;

use tracing::{debug, trace};

use super::context::RequestContext;
use crate::errors::{LinkRouterError, Result};
use crate::storage::{Destination, Link};

impl Link {
    /// Conditional destinations in evaluation order
    ///
    /// Highest priority first. `sort_by_key` is stable, so equal priorities
    /// keep insertion order.
    pub fn ordered_destinations(&self) -> Vec<&Destination> {
        let mut ordered: Vec<&Destination> = self.destinations.iter().collect();
        ordered.sort_by_key(|d| Reverse(d.priority));
        ordered
    }

    /// Pick the destination for `ctx`
    ///
    /// The first destination (in [`Link::ordered_destinations`] order) whose
    /// condition holds wins. Destinations without a condition are never
    /// picked here; only the default slot is unconditional. Fails with
    /// `NoDestinationResolved` when nothing matches and no usable default
    /// is set.
    pub fn resolve(&self, ctx: &RequestContext) -> Result<&Destination> {
        for destination in self.ordered_destinations() {
            let Some(condition) = destination.condition.as_ref() else {
                trace!(
                    "Skipping unconditional destination {} on link {}",
                    destination.id, self.short
                );
                continue;
            };

            if condition.evaluate(ctx) {
                debug!(
                    "Link {} resolved to {} (priority {}, condition {})",
                    self.short, destination.url, destination.priority, condition
                );
                return Ok(destination);
            }
        }

        match self.default_destination.as_ref() {
            Some(default) if !default.url.is_empty() => {
                debug!("Link {} fell back to default {}", self.short, default.url);
                Ok(default)
            }
            _ => Err(LinkRouterError::no_destination_resolved(format!(
                "no destination of link '{}' matches country={} browser={}",
                self.short, ctx.country, ctx.browser
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Predicate;

    fn dest(id: &str, url: &str, condition: Predicate, priority: i64) -> Destination {
        Destination::new(id, url, Some(condition), priority)
    }

    fn google_link() -> Link {
        Link::new("2", "google")
            .with_destination(dest(
                "a",
                "https://appleNotFound.com/",
                Predicate::browser_in(["safari"]),
                2,
            ))
            .with_destination(dest(
                "b",
                "https://google.co.in/",
                Predicate::country_equals("IN"),
                1,
            ))
            .with_destination(dest(
                "c",
                "https://google.com/",
                Predicate::country_equals("US"),
                1,
            ))
    }

    #[test]
    fn test_priority_then_condition() {
        let ctx = RequestContext::new("1.1.1.1", "US").with_browser("chrome");
        let link = google_link();
        assert_eq!(link.resolve(&ctx).unwrap().url, "https://google.com/");
    }

    #[test]
    fn test_higher_priority_wins() {
        let ctx = RequestContext::new("1.1.1.1", "US").with_browser("safari");
        assert_eq!(
            google_link().resolve(&ctx).unwrap().url,
            "https://appleNotFound.com/"
        );
    }

    #[test]
    fn test_default_fallback() {
        let link = Link::new("3", "example").with_destination(dest(
            "a",
            "https://example.com/",
            Predicate::country_equals("US"),
            1,
        ));
        let ctx = RequestContext::new("1.1.1.1", "FR");

        let err = link.resolve(&ctx).unwrap_err();
        assert!(err.is_unresolved());

        let link = link.with_default(Destination::fallback("d", "https://example.org/"));
        assert_eq!(link.resolve(&ctx).unwrap().url, "https://example.org/");
    }

    #[test]
    fn test_default_with_empty_url_is_ignored() {
        let link = Link::new("1", "empty").with_default(Destination::fallback("d", ""));
        assert!(
            link.resolve(&RequestContext::default())
                .unwrap_err()
                .is_unresolved()
        );
    }

    #[test]
    fn test_default_condition_is_ignored() {
        let default = Destination::new(
            "d",
            "https://fallback.example/",
            Some(Predicate::and(vec![])),
            0,
        );
        let link = Link::new("1", "x").with_default(default);
        assert_eq!(
            link.resolve(&RequestContext::default()).unwrap().url,
            "https://fallback.example/"
        );
    }

    #[test]
    fn test_unconditional_destination_is_never_matched() {
        let link = Link::new("1", "x")
            .with_destination(Destination::new("a", "https://nope.example/", None, 10));
        assert!(
            link.resolve(&RequestContext::default())
                .unwrap_err()
                .is_unresolved()
        );
    }

    #[test]
    fn test_equal_priority_keeps_insertion_order() {
        let link = Link::new("1", "tie")
            .with_destination(dest("first", "https://first.example/", Predicate::or(vec![]), 5))
            .with_destination(dest("second", "https://second.example/", Predicate::or(vec![]), 5));
        let ctx = RequestContext::default();
        for _ in 0..10 {
            assert_eq!(link.resolve(&ctx).unwrap().id, "first");
        }
    }

    #[test]
    fn test_resolve_does_not_reorder_link() {
        let link = google_link();
        let before = link.clone();
        let _ = link.resolve(&RequestContext::new("1.1.1.1", "IN"));
        assert_eq!(link, before);
    }

    #[test]
    fn test_negative_priorities_sort_last() {
        let link = Link::new("1", "neg")
            .with_destination(dest("low", "https://low.example/", Predicate::or(vec![]), -3))
            .with_destination(dest("zero", "https://zero.example/", Predicate::or(vec![]), 0));
        let ids: Vec<&str> = link
            .ordered_destinations()
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(ids, ["zero", "low"]);
    }
}
