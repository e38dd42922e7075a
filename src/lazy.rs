use std::collections::BTreeSet;

use crate::dom::{classes, Page};

/// Images waiting for their first appearance in the viewport.
#[derive(Debug, Default)]
pub struct LazyImages {
    pending: BTreeSet<String>,
}

impl LazyImages {
    pub fn observe(&mut self, id: &str) {
        self.pending.insert(id.to_string());
    }

    pub fn is_observed(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    pub fn pending(&self) -> Vec<String> {
        self.pending.iter().cloned().collect()
    }

    /// Handle a visibility change. The first time an observed image becomes
    /// visible its `data-src` moves into `src` and it stops being observed.
    /// Returns `true` when the image was swapped so the caller can unobserve it.
    pub fn on_visible<P: Page>(&mut self, page: &P, id: &str, visible: bool) -> bool {
        if !visible || !self.pending.contains(id) {
            return false;
        }
        self.pending.remove(id);
        match page.attr(id, "data-src") {
            Some(src) => {
                page.set_attr(id, "src", &src);
                page.add_class(id, classes::LOADED);
                log::debug!("[lazy] loaded #{}", id);
            }
            None => log::debug!("[lazy] #{} has no data-src", id),
        }
        true
    }
}
