//! Search engine for settings trees.
//!
//! One call to [`SearchEngine::search`] walks every root, decides visibility
//! bottom-up and writes the result into the tree:
//!
//! - labels are visible when their text matches every term
//! - containers are visible when their title matches or any child is visible;
//!   a matching title forces the whole subtree visible
//! - collapsible groups behave like containers and unfold whenever they stay
//!   visible; search never folds a group
//! - forms show and hide whole rows through their [`FormRowVisibility`]
//!   controller, matched on the row's label side
//!
//! [`FormRowVisibility`]: crate::form_rows::FormRowVisibility

use crate::error::SearchError;
use crate::matcher::QueryTerms;
use crate::search_index::SearchIndex;
use settings_search_config::SearchConfig;
use settings_search_tree::{Node, NodeId, NodeKind, UiTree};

/// What a node needs from the current pass, decided before any mutation.
#[derive(Debug, Clone, Copy)]
enum Visit {
    Label(bool),
    ImplicitRow(bool),
    Group {
        title_matched: bool,
        collapsible: bool,
    },
    Form,
}

/// Recursive match-and-propagate engine.
#[derive(Debug, Default)]
pub struct SearchEngine {
    config: SearchConfig,
    index: SearchIndex,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            index: SearchIndex::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the configuration; takes effect on the next search.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut SearchIndex {
        &mut self.index
    }

    /// Filter every root by `query` and return each root's visibility.
    ///
    /// Running the same query twice over an unchanged tree leaves flags and
    /// form row order exactly as the first run did.
    pub fn search(
        &mut self,
        tree: &mut UiTree,
        query: &str,
        roots: &[NodeId],
    ) -> Result<Vec<bool>, SearchError> {
        let terms = QueryTerms::parse(query, self.config.case_sensitive);
        log::debug!(
            "search {:?} over {} roots ({} terms)",
            query,
            roots.len(),
            terms.terms().len()
        );
        let visible = roots
            .iter()
            .map(|&root| self.visit(tree, root, &terms))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "search {:?} left {} of {} roots visible",
            query,
            visible.iter().filter(|v| **v).count(),
            roots.len()
        );
        Ok(visible)
    }

    fn classify(&self, tree: &UiTree, id: NodeId, terms: &QueryTerms) -> Result<Visit, SearchError> {
        let node = tree.get(id)?;
        let title_matches = |title: &Option<String>| match title {
            Some(title) => terms.matches(title),
            None => terms.is_empty(),
        };

        Ok(match node.kind() {
            NodeKind::Label { text } => Visit::Label(terms.matches(text)),
            NodeKind::Form => Visit::Form,
            NodeKind::Container { title: None } => {
                match self.implicit_row_match(tree, node, terms)? {
                    Some(matched) => Visit::ImplicitRow(matched),
                    None => Visit::Group {
                        title_matched: terms.is_empty(),
                        collapsible: false,
                    },
                }
            }
            NodeKind::Container { title } => Visit::Group {
                title_matched: title_matches(title),
                collapsible: false,
            },
            NodeKind::Collapsible { title, .. } => Visit::Group {
                title_matched: title_matches(title),
                collapsible: true,
            },
        })
    }

    /// Match result for an untitled (label, field) pair laid out as a plain
    /// container, or `None` if the node does not have that shape.
    fn implicit_row_match(
        &self,
        tree: &UiTree,
        node: &Node,
        terms: &QueryTerms,
    ) -> Result<Option<bool>, SearchError> {
        if !self.config.implicit_pair_rows {
            return Ok(None);
        }
        let [first, _] = node.children() else {
            return Ok(None);
        };
        Ok(tree.get(*first)?.text().map(|text| terms.matches(text)))
    }

    fn visit(
        &mut self,
        tree: &mut UiTree,
        id: NodeId,
        terms: &QueryTerms,
    ) -> Result<bool, SearchError> {
        match self.classify(tree, id, terms)? {
            Visit::Label(visible) => {
                tree.set_visible(id, visible)?;
                Ok(visible)
            }
            Visit::ImplicitRow(visible) => {
                tree.set_visible_recursive(id, visible)?;
                Ok(visible)
            }
            Visit::Group {
                title_matched,
                collapsible,
            } => {
                let visible = self.visit_group(tree, id, terms, title_matched)?;
                if collapsible
                    && visible
                    && self.config.auto_expand
                    && tree.set_expanded(id, true)?
                {
                    log::trace!("auto-expanded {}", id);
                }
                Ok(visible)
            }
            Visit::Form => self.visit_form(tree, id, terms),
        }
    }

    fn visit_group(
        &mut self,
        tree: &mut UiTree,
        id: NodeId,
        terms: &QueryTerms,
        title_matched: bool,
    ) -> Result<bool, SearchError> {
        let children = tree.children(id)?.to_vec();

        let mut any_child_visible = false;
        for &child in &children {
            any_child_visible |= self.visit(tree, child, terms)?;
        }

        // The group itself satisfies the query, so everything inside it stays.
        if title_matched && !terms.is_empty() {
            let everything = QueryTerms::empty();
            for &child in &children {
                self.visit(tree, child, &everything)?;
            }
        }

        let visible = title_matched || any_child_visible;
        tree.set_visible(id, visible)?;
        Ok(visible)
    }

    fn visit_form(
        &mut self,
        tree: &mut UiTree,
        form: NodeId,
        terms: &QueryTerms,
    ) -> Result<bool, SearchError> {
        let labels = self.index.get_or_create(tree, form)?.row_labels();

        let mut any_row_visible = false;
        for (index, label) in labels.into_iter().enumerate() {
            let row_visible = self.visit(tree, label, terms)?;
            let attached = self
                .index
                .get_mut(form)?
                .set_row_visible(tree, index, row_visible)?;
            if attached && row_visible {
                // Reattaching unhid the whole row; redo nested filtering.
                self.visit(tree, label, terms)?;
            }
            any_row_visible |= row_visible;
        }

        let visible = any_row_visible || terms.is_empty();
        tree.set_visible(form, visible)?;
        Ok(visible)
    }
}
