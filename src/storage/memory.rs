//! In-memory link store guarded by a single read/write lock

use parking_lot::RwLock;
use tracing::{debug, info};

use super::{Link, LinkStore, normalize_short};
use crate::errors::{LinkRouterError, Result};

#[derive(Default)]
pub struct InMemoryLinkStore {
    links: RwLock<Vec<Link>>,
}

impl InMemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_links(links: Vec<Link>) -> Self {
        Self {
            links: RwLock::new(links),
        }
    }

    /// Replace the whole content, used when reloading from disk
    pub(crate) fn replace_all(&self, links: Vec<Link>) {
        *self.links.write() = links;
    }

    pub fn len(&self) -> usize {
        self.links.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.read().is_empty()
    }
}

/// Reject saving an active link whose short code another active record holds
fn check_short_available(links: &[Link], candidate: &Link) -> Result<()> {
    if !candidate.active {
        return Ok(());
    }
    let taken = links
        .iter()
        .any(|l| l.active && l.id != candidate.id && l.short == candidate.short);
    if taken {
        return Err(LinkRouterError::short_code_conflict(format!(
            "short code '{}' is already used by an active link",
            candidate.short
        )));
    }
    Ok(())
}

impl LinkStore for InMemoryLinkStore {
    fn save_link(&self, link: Link) -> Result<()> {
        let mut links = self.links.write();
        check_short_available(&links, &link)?;

        match links.iter_mut().find(|l| l.id == link.id) {
            Some(existing) => {
                debug!("Replacing link {} ({})", link.id, link.short);
                *existing = link;
            }
            None => {
                info!("Saving new link {} ({})", link.id, link.short);
                links.push(link);
            }
        }
        Ok(())
    }

    fn get_link_by_id(&self, id: &str) -> Result<Link> {
        self.links
            .read()
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| LinkRouterError::not_found(format!("link '{}' not found by id", id)))
    }

    fn get_link_by_short(&self, short: &str) -> Result<Link> {
        let short = normalize_short(short);
        self.links
            .read()
            .iter()
            .find(|l| l.active && l.short == short)
            .cloned()
            .ok_or_else(|| {
                LinkRouterError::not_found(format!("link '{}' not found by short", short))
            })
    }

    fn toggle_link_by_short(&self, short: &str) -> Result<Link> {
        let short = normalize_short(short);
        let mut links = self.links.write();

        // An active holder of the code wins over deactivated records, so a
        // reactivation can never collide with another active link.
        let index = links
            .iter()
            .position(|l| l.active && l.short == short)
            .or_else(|| links.iter().position(|l| l.short == short))
            .ok_or_else(|| {
                LinkRouterError::not_found(format!("link '{}' not found by short", short))
            })?;

        let link = &mut links[index];
        link.active = !link.active;
        info!(
            "Link {} ({}) is now {}",
            link.id,
            link.short,
            if link.active { "active" } else { "inactive" }
        );
        Ok(link.clone())
    }

    fn list_links(&self) -> Result<Vec<Link>> {
        Ok(self.links.read().clone())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
