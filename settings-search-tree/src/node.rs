//! Node identity and node kinds.

use std::fmt;

/// Stable identity of a node inside a [`UiTree`](crate::UiTree).
///
/// Ids are arena slots and are never reused after a node is destroyed, so two
/// distinct nodes never compare equal even if their contents do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena index, mostly useful for diagnostics.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The closed set of node variants the search engine understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Leaf carrying display text used for matching.
    Label {
        /// Text shown to the user.
        text: String,
    },
    /// Plain grouping node.
    Container {
        /// Optional group title, matched like a label.
        title: Option<String>,
    },
    /// Form layout whose children are consecutive (label, field) row pairs.
    Form,
    /// Group box that can be folded by the user.
    Collapsible {
        /// Optional group title, matched like a label.
        title: Option<String>,
        /// Whether the content is currently unfolded.
        expanded: bool,
    },
}

impl NodeKind {
    /// Short tag used in outlines and log lines.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Label { .. } => "label",
            NodeKind::Container { .. } => "container",
            NodeKind::Form => "form",
            NodeKind::Collapsible { .. } => "collapsible",
        }
    }

    /// Title of a container or collapsible, if any.
    pub fn title(&self) -> Option<&str> {
        match self {
            NodeKind::Container { title } | NodeKind::Collapsible { title, .. } => {
                title.as_deref()
            }
            NodeKind::Label { .. } | NodeKind::Form => None,
        }
    }
}

/// A single node stored in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) visible: bool,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
            parent: None,
            visible: true,
        }
    }

    /// Variant and variant-specific data.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Attached children in live order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent this node is attached to, `None` for roots and detached nodes.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Visibility flag; defaults to `true`.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Label text, `None` for other kinds.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Label { text } => Some(text),
            _ => None,
        }
    }

    /// Expanded flag of a collapsible, `None` for other kinds.
    pub fn is_expanded(&self) -> Option<bool> {
        match self.kind {
            NodeKind::Collapsible { expanded, .. } => Some(expanded),
            _ => None,
        }
    }

    pub fn is_label(&self) -> bool {
        matches!(self.kind, NodeKind::Label { .. })
    }

    pub fn is_form(&self) -> bool {
        matches!(self.kind, NodeKind::Form)
    }
}
