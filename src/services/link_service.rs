//! Link service layer
//!
//! Shared business logic on top of a [`LinkStore`]: creation from payloads,
//! resolution of short codes for a request, activation toggling and lookup.
//! Errors keep "link does not exist" ([`LinkRouterError::NotFound`]) apart
//! from "link exists but nothing matched"
//! ([`LinkRouterError::NoDestinationResolved`]).

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::builder::{LinkBuilder, LinkPayload};
use crate::errors::{LinkRouterError, Result};
use crate::routing::RequestContext;
use crate::storage::{Destination, Link, LinkStore};
use crate::utils::IdGenerator;

pub struct LinkService {
    store: Arc<dyn LinkStore>,
    builder: LinkBuilder,
}

impl LinkService {
    pub fn new(store: Arc<dyn LinkStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            builder: LinkBuilder::new(ids),
        }
    }

    pub fn store(&self) -> &Arc<dyn LinkStore> {
        &self.store
    }

    /// Build a link from `payload` and save it
    pub fn create_link(&self, payload: LinkPayload) -> Result<Link> {
        let link = self.builder.build(payload)?;
        self.store.save_link(link.clone())?;
        info!(
            "Created link {} ({}) with {} destinations",
            link.short,
            link.id,
            link.destinations.len()
        );
        Ok(link)
    }

    /// Replace the record `id` with a link built from `payload`
    ///
    /// The creation time and active flag of the existing record are kept, as
    /// is its short code unless the payload names a new one.
    pub fn replace_link(&self, id: &str, mut payload: LinkPayload) -> Result<Link> {
        let existing = self.store.get_link_by_id(id)?;
        let keeps_short = payload
            .short
            .as_deref()
            .map(crate::storage::normalize_short)
            .is_none_or(str::is_empty);
        if keeps_short {
            payload.short = Some(existing.short.clone());
        }
        let mut link = self.builder.build_with_id(existing.id, payload)?;
        link.created_at = existing.created_at;
        link.active = existing.active;
        self.store.save_link(link.clone())?;
        info!("Replaced link {} ({})", link.short, link.id);
        Ok(link)
    }

    /// Resolve `short` for the request described by `ctx`
    pub fn resolve(&self, short: &str, ctx: &RequestContext) -> Result<Destination> {
        let link = self.store.get_link_by_short(short)?;
        match link.resolve(ctx) {
            Ok(destination) => {
                debug!("Resolved {} -> {}", link.short, destination.url);
                Ok(destination.clone())
            }
            Err(e) => {
                if e.is_unresolved() {
                    warn!(
                        "No destination for {} (country={}, browser={})",
                        link.short, ctx.country, ctx.browser
                    );
                }
                Err(e)
            }
        }
    }

    pub fn toggle(&self, short: &str) -> Result<Link> {
        self.store.toggle_link_by_short(short)
    }

    pub fn get_by_id(&self, id: &str) -> Result<Link> {
        self.store.get_link_by_id(id)
    }

    pub fn get_by_short(&self, short: &str) -> Result<Link> {
        self.store.get_link_by_short(short)
    }

    /// Lookup by short code including inactive records
    pub fn find_any_by_short(&self, short: &str) -> Result<Link> {
        let short = crate::storage::normalize_short(short);
        match self.store.get_link_by_short(short) {
            Ok(link) => Ok(link),
            Err(LinkRouterError::NotFound(msg)) => self
                .store
                .list_links()?
                .into_iter()
                .find(|l| l.short == short)
                .ok_or(LinkRouterError::NotFound(msg)),
            Err(e) => Err(e),
        }
    }

    pub fn list(&self) -> Result<Vec<Link>> {
        self.store.list_links()
    }
}
