//! Typed error variants for the settings-search-tree crate.
//!
//! Every tree primitive that takes a [`NodeId`] can fail when the id does not
//! name a live node, or when the requested edit would break the tree shape.
//! These are programming errors on the host side, so callers are expected to
//! propagate them rather than recover.

use crate::NodeId;
use thiserror::Error;

/// Errors produced by [`UiTree`](crate::UiTree) operations and layout loading.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The id does not refer to a live node (never allocated or destroyed).
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// A child was added to a label, which is always a leaf.
    #[error("node {0} is a label and cannot hold children")]
    LeafParent(NodeId),

    /// The node is already attached somewhere else in the tree.
    #[error("node {child} is already attached to {parent}")]
    AlreadyAttached {
        /// Node that was being attached.
        child: NodeId,
        /// Its current parent.
        parent: NodeId,
    },

    /// Attaching the node would make it its own ancestor.
    #[error("attaching {child} under {parent} would create a cycle")]
    Cycle {
        /// Node that was being attached.
        child: NodeId,
        /// Requested parent.
        parent: NodeId,
    },

    /// The node is not a child of the given parent.
    #[error("node {child} is not a child of {parent}")]
    NotAChild {
        /// Node that was looked up.
        child: NodeId,
        /// Parent that was searched.
        parent: NodeId,
    },

    /// An insertion position is past the end of the child list.
    #[error("insert position {position} out of range for {parent} with {len} children")]
    PositionOutOfRange {
        /// Parent being edited.
        parent: NodeId,
        /// Requested position.
        position: usize,
        /// Current child count.
        len: usize,
    },

    /// A form-only operation was applied to another node kind.
    #[error("node {0} is not a form")]
    NotAForm(NodeId),

    /// A form holds an odd number of children, so its rows cannot be paired.
    #[error("form {form} has {len} children, expected (label, field) pairs")]
    UnpairedFormChild {
        /// The malformed form.
        form: NodeId,
        /// Its child count.
        len: usize,
    },

    /// The layout description could not be parsed.
    #[error("layout parse error: {0}")]
    Layout(#[from] serde_yaml_ng::Error),
}
