//! linkrouter - conditional short-link routing
//!
//! Resolves a short code to one of several destination URLs based on
//! attributes of the inbound request (country, browser), using a prioritized,
//! condition-gated destination list with a default fallback.
//!
//! # Architecture
//! - `routing`: predicate model and destination resolution (pure)
//! - `storage`: link data model and link stores (memory, JSON file)
//! - `services`: link creation, resolution orchestration, request context
//!   derivation (browser detection, GeoIP)
//! - `interfaces`: command-line interface
//! - `config`: configuration management
//! - `system`: logging setup
//! - `utils`: id generation, validation, IP helpers

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod routing;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
