use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::routing::Predicate;

/// One candidate redirect target
///
/// `priority` is evaluated highest first; equal priorities keep the order in
/// which destinations were inserted into the link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub priority: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Predicate>,
}

impl Destination {
    pub fn new(
        id: impl Into<String>,
        url: impl Into<String>,
        condition: Option<Predicate>,
        priority: i64,
    ) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            priority,
            condition,
        }
    }

    /// Unconditional destination, meant for the default slot
    pub fn fallback(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(id, url, None, 0)
    }
}

/// A short code and the destinations it can route to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub short: String,
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_destination: Option<Destination>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl Link {
    pub fn new(id: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            short: short.into(),
            destinations: Vec::new(),
            default_destination: None,
            active: true,
            created_at: Utc::now(),
        }
    }

    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destinations.push(destination);
        self
    }

    pub fn with_default(mut self, destination: Destination) -> Self {
        self.default_destination = Some(destination);
        self
    }
}
