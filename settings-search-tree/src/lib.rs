//! Node model for the settings-search filter engine.
//!
//! This crate provides the passive tree contract the engine operates on:
//!
//! - [`UiTree`]: an arena owning every node, attached or detached
//! - [`NodeId`]: stable identity used as a cache key
//! - [`NodeKind`]: the closed set of variants (label, container, form, collapsible)
//! - [`Layout`] / [`NodeSpec`]: YAML-friendly descriptions that build a tree
//! - [`UiTree::outline`]: a text rendering of what is currently shown

mod error;
pub mod layout;
mod node;
mod outline;
mod tree;

pub use error::TreeError;
pub use layout::{Layout, NodeSpec, RowSpec};
pub use node::{Node, NodeId, NodeKind};
pub use tree::UiTree;
