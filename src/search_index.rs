//! Per-form controller cache.
//!
//! Each form gets one [`FormRowVisibility`] the first time a search touches
//! it, and keeps it for as long as the form lives, so the original row order
//! and detach history survive every keystroke.
//!
//! Entries are keyed by [`NodeId`] identity. The index never notices a form
//! being destroyed on its own; the host must [`evict`](SearchIndex::evict) the
//! entry (or call [`prune`](SearchIndex::prune)) or the detached rows it
//! remembers stay allocated in the tree.

use crate::error::SearchError;
use crate::form_rows::FormRowVisibility;
use settings_search_tree::{NodeId, UiTree};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct SearchIndex {
    controllers: HashMap<NodeId, FormRowVisibility>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller for `form`, snapshotting the form on first use.
    pub fn get_or_create(
        &mut self,
        tree: &UiTree,
        form: NodeId,
    ) -> Result<&mut FormRowVisibility, SearchError> {
        if !self.controllers.contains_key(&form) {
            let controller = FormRowVisibility::snapshot(tree, form)?;
            log::debug!("created row controller for form {}", form);
            self.controllers.insert(form, controller);
        }
        self.get_mut(form)
    }

    pub fn get(&self, form: NodeId) -> Option<&FormRowVisibility> {
        self.controllers.get(&form)
    }

    /// Existing controller for `form`; missing entries are an error.
    pub fn get_mut(&mut self, form: NodeId) -> Result<&mut FormRowVisibility, SearchError> {
        self.controllers
            .get_mut(&form)
            .ok_or(SearchError::MissingController(form))
    }

    pub fn contains(&self, form: NodeId) -> bool {
        self.controllers.contains_key(&form)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Remove and return the controller for a form that is going away.
    pub fn evict(&mut self, form: NodeId) -> Option<FormRowVisibility> {
        let evicted = self.controllers.remove(&form);
        if evicted.is_some() {
            log::debug!("evicted row controller for form {}", form);
        }
        evicted
    }

    /// Evict every entry whose form no longer exists in `tree`.
    ///
    /// Returns the evicted controllers so the caller can free their detached
    /// rows.
    pub fn prune(&mut self, tree: &UiTree) -> Vec<FormRowVisibility> {
        let stale: Vec<NodeId> = self
            .controllers
            .keys()
            .copied()
            .filter(|form| !tree.contains(*form))
            .collect();
        stale
            .into_iter()
            .filter_map(|form| self.evict(form))
            .collect()
    }
}
