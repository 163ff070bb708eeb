//! Service layer
//!
//! Link construction, resolution orchestration and request-context
//! derivation. The routing engine itself lives in [`crate::routing`].

pub mod builder;
pub mod context;
pub mod geoip;
pub mod link_service;
pub mod user_agent;

pub use builder::{DestinationPayload, LinkBuilder, LinkPayload, parse_condition};
pub use context::{ContextResolver, RequestHeaders};
pub use geoip::{CountryLookup, GeoIpProvider};
pub use link_service::LinkService;
pub use user_agent::detect_browser;
