//! Boolean conditions over a [`RequestContext`].
//!
//! A predicate is a tree: leaves test one request attribute, composites
//! combine owned children. The serde form is internally tagged on `type`:
//!
//! ```json
//! { "type": "AND", "children": [
//!     { "type": "CountryEquals", "country": "US" },
//!     { "type": "NOT", "child": { "type": "BrowserIn", "browsers": ["safari"] } }
//! ] }
//! ```
//!
//! Note the vacuous cases: an empty `AND` never matches while an empty `OR`
//! always does.

use serde::{Deserialize, Serialize};

use super::context::RequestContext;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Predicate {
    #[serde(rename = "CountryEquals")]
    CountryEquals { country: String },

    #[serde(rename = "BrowserIn")]
    BrowserIn { browsers: Vec<String> },

    #[serde(rename = "AND", alias = "And")]
    And { children: Vec<Predicate> },

    #[serde(rename = "OR", alias = "Or")]
    Or { children: Vec<Predicate> },

    #[serde(rename = "NOT", alias = "Not")]
    Not { child: Box<Predicate> },
}

impl Predicate {
    pub fn country_equals(country: impl Into<String>) -> Self {
        Predicate::CountryEquals {
            country: country.into(),
        }
    }

    pub fn browser_in<I, S>(browsers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::BrowserIn {
            browsers: browsers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn and(children: Vec<Predicate>) -> Self {
        Predicate::And { children }
    }

    pub fn or(children: Vec<Predicate>) -> Self {
        Predicate::Or { children }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(child: Predicate) -> Self {
        Predicate::Not {
            child: Box::new(child),
        }
    }

    /// Evaluate the tree against `ctx`
    ///
    /// Total and side-effect free. `And`/`Or` short-circuit.
    pub fn evaluate(&self, ctx: &RequestContext) -> bool {
        match self {
            Predicate::CountryEquals { country } => ctx.country == *country,
            Predicate::BrowserIn { browsers } => browsers.iter().any(|b| *b == ctx.browser),
            Predicate::And { children } => {
                !children.is_empty() && children.iter().all(|c| c.evaluate(ctx))
            }
            Predicate::Or { children } => {
                children.is_empty() || children.iter().any(|c| c.evaluate(ctx))
            }
            Predicate::Not { child } => !child.evaluate(ctx),
        }
    }

    /// Tag name as it appears in the serialized form
    pub fn kind(&self) -> &'static str {
        match self {
            Predicate::CountryEquals { .. } => "CountryEquals",
            Predicate::BrowserIn { .. } => "BrowserIn",
            Predicate::And { .. } => "AND",
            Predicate::Or { .. } => "OR",
            Predicate::Not { .. } => "NOT",
        }
    }

    /// Walk the tree depth-first, visiting every node
    pub fn visit<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Predicate),
    {
        f(self);
        match self {
            Predicate::And { children } | Predicate::Or { children } => {
                for child in children {
                    child.visit(f);
                }
            }
            Predicate::Not { child } => child.visit(f),
            Predicate::CountryEquals { .. } | Predicate::BrowserIn { .. } => {}
        }
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::CountryEquals { country } => write!(f, "country == {}", country),
            Predicate::BrowserIn { browsers } => write!(f, "browser in [{}]", browsers.join(", ")),
            Predicate::And { children } | Predicate::Or { children } => {
                let joiner = if matches!(self, Predicate::And { .. }) {
                    " AND "
                } else {
                    " OR "
                };
                if children.is_empty() {
                    return write!(f, "{}()", self.kind());
                }
                let parts: Vec<String> = children.iter().map(|c| c.to_string()).collect();
                write!(f, "({})", parts.join(joiner))
            }
            Predicate::Not { child } => write!(f, "NOT {}", child),
        }
    }
}
