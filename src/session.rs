//! Search session owned by a settings dialog.
//!
//! [`SettingsSearch`] wraps a [`SearchEngine`] with the state a dialog keeps
//! between keystrokes: the list of searched roots (which grows as plugin
//! panels are created), the last query (re-run after widgets are reparented,
//! e.g. on tab change), expand/collapse-all, and controller cleanup when a
//! panel is torn down.

use crate::engine::SearchEngine;
use crate::error::SearchError;
use settings_search_config::SearchConfig;
use settings_search_tree::{NodeId, UiTree};

#[derive(Debug, Default)]
pub struct SettingsSearch {
    engine: SearchEngine,
    roots: Vec<NodeId>,
    query: String,
}

impl SettingsSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            engine: SearchEngine::new(config),
            roots: Vec::new(),
            query: String::new(),
        }
    }

    /// Create a session searching `roots`.
    pub fn with_roots(config: SearchConfig, roots: impl IntoIterator<Item = NodeId>) -> Self {
        let mut search = Self::new(config);
        for root in roots {
            search.add_root(root);
        }
        search
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SearchEngine {
        &mut self.engine
    }

    /// Searched roots in registration order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Register a root. Returns `false` if it was already registered.
    ///
    /// Only top-level panels should be registered; a root nested inside
    /// another root would be searched twice.
    pub fn add_root(&mut self, root: NodeId) -> bool {
        if self.roots.contains(&root) {
            return false;
        }
        self.roots.push(root);
        true
    }

    /// Unregister a root. Returns `false` if it was not registered.
    pub fn remove_root(&mut self, root: NodeId) -> bool {
        let before = self.roots.len();
        self.roots.retain(|&r| r != root);
        self.roots.len() != before
    }

    /// The query of the most recent search.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Filter all registered roots by `query` and remember it.
    pub fn search(&mut self, tree: &mut UiTree, query: &str) -> Result<Vec<bool>, SearchError> {
        self.query.clear();
        self.query.push_str(query);
        self.search_again(tree)
    }

    /// Re-run the remembered query, e.g. after the host moved widgets around.
    pub fn search_again(&mut self, tree: &mut UiTree) -> Result<Vec<bool>, SearchError> {
        self.engine.search(tree, &self.query, &self.roots)
    }

    /// Fold or unfold every collapsible group under the registered roots,
    /// including groups inside rows currently filtered out of their form.
    ///
    /// Returns how many groups changed state.
    pub fn set_all_expanded(
        &mut self,
        tree: &mut UiTree,
        expanded: bool,
    ) -> Result<usize, SearchError> {
        let mut changed = 0;
        for &root in &self.roots {
            let (reachable, _) = self.reachable(tree, root)?;
            for node in reachable {
                if tree.set_expanded(node, expanded)? {
                    changed += 1;
                }
            }
        }
        log::debug!(
            "{} {} groups",
            if expanded { "expanded" } else { "collapsed" },
            changed
        );
        Ok(changed)
    }

    /// Destroy `id` and its subtree, dropping every row controller inside it.
    ///
    /// Rows that a controller had detached are freed as well. Returns the
    /// number of nodes freed.
    ///
    /// `id` must not be a row of a form that stays alive; remove whole forms
    /// or their ancestors instead.
    pub fn destroy_node(&mut self, tree: &mut UiTree, id: NodeId) -> Result<usize, SearchError> {
        let (reachable, detached) = self.reachable(tree, id)?;
        let index = self.engine.index_mut();
        for node in &reachable {
            index.evict(*node);
        }

        let mut freed = tree.destroy(id)?;
        for node in detached {
            freed += tree.destroy(node)?;
        }

        self.roots.retain(|&root| tree.contains(root));
        log::debug!("destroyed {} nodes under {}", freed, id);
        Ok(freed)
    }

    /// Every node under `start`, following forms into their detached rows.
    ///
    /// The second list holds the detached row nodes encountered.
    fn reachable(
        &self,
        tree: &UiTree,
        start: NodeId,
    ) -> Result<(Vec<NodeId>, Vec<NodeId>), SearchError> {
        let mut reachable = Vec::new();
        let mut detached = Vec::new();
        let mut pending = vec![start];
        while let Some(top) = pending.pop() {
            for node in tree.descendants(top)? {
                if let Some(controller) = self.engine.index().get(node) {
                    let hidden = controller.detached_nodes();
                    detached.extend_from_slice(&hidden);
                    pending.extend(hidden);
                }
                reachable.push(node);
            }
        }
        Ok((reachable, detached))
    }
}
