//! Declarative layout descriptions.
//!
//! Hosts and tests describe a settings screen as nested [`NodeSpec`] values,
//! usually loaded from YAML, and materialise it into a [`UiTree`].
//!
//! ```yaml
//! roots:
//!   - kind: collapsible
//!     title: Network
//!     children:
//!       - kind: form
//!         rows:
//!           - label: { kind: label, text: Address }
//!             field: { kind: label, text: 127.0.0.1 }
//! ```

use crate::error::TreeError;
use crate::node::NodeId;
use crate::tree::UiTree;
use serde::{Deserialize, Serialize};

fn default_expanded() -> bool {
    true
}

/// Description of one node and its subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeSpec {
    Label {
        text: String,
    },
    Container {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    Collapsible {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default = "default_expanded")]
        expanded: bool,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    Form {
        #[serde(default)]
        rows: Vec<RowSpec>,
    },
}

/// One (label, field) row of a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSpec {
    pub label: NodeSpec,
    pub field: NodeSpec,
}

/// A whole screen: the search roots in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub roots: Vec<NodeSpec>,
}

impl Layout {
    /// Parse a YAML layout description.
    pub fn from_yaml_str(source: &str) -> Result<Self, TreeError> {
        Ok(serde_yaml_ng::from_str(source)?)
    }
}

impl UiTree {
    /// Build a fresh tree from a layout, returning it with its root ids.
    pub fn from_layout(layout: &Layout) -> Result<(Self, Vec<NodeId>), TreeError> {
        let mut tree = Self::new();
        let roots = layout
            .roots
            .iter()
            .map(|spec| tree.build(spec))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "built layout with {} roots and {} nodes",
            roots.len(),
            tree.len()
        );
        Ok((tree, roots))
    }

    /// Materialise `spec` as a new detached subtree.
    pub fn build(&mut self, spec: &NodeSpec) -> Result<NodeId, TreeError> {
        match spec {
            NodeSpec::Label { text } => Ok(self.add_label(text.as_str())),
            NodeSpec::Container { title, children } => {
                let id = self.add_container(title.as_deref());
                self.build_children(id, children)?;
                Ok(id)
            }
            NodeSpec::Collapsible {
                title,
                expanded,
                children,
            } => {
                let id = self.add_collapsible(title.as_deref(), *expanded);
                self.build_children(id, children)?;
                Ok(id)
            }
            NodeSpec::Form { rows } => {
                let id = self.add_form();
                for row in rows {
                    let label = self.build(&row.label)?;
                    let field = self.build(&row.field)?;
                    self.add_form_row(id, label, field)?;
                }
                Ok(id)
            }
        }
    }

    fn build_children(&mut self, parent: NodeId, children: &[NodeSpec]) -> Result<(), TreeError> {
        for child in children {
            let id = self.build(child)?;
            self.append_child(parent, id)?;
        }
        Ok(())
    }
}
