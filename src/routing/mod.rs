//! Destination resolution engine
//!
//! Pure, side-effect free evaluation of predicate trees and selection of a
//! link's destination for a given [`RequestContext`].

pub mod context;
pub mod predicate;
mod resolver;

pub use context::{RequestContext, UNKNOWN, normalize_country};
pub use predicate::Predicate;
