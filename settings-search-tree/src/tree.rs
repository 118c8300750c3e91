//! Arena-backed UI tree.
//!
//! The host owns a [`UiTree`] and hands the search engine `&mut` access for
//! the duration of one pass. Nodes are addressed by [`NodeId`]; detaching a
//! node keeps it alive in the arena so it can be reattached later with its
//! flags and children intact.

use crate::error::TreeError;
use crate::node::{Node, NodeId, NodeKind};

/// Owner of every node, attached or detached.
#[derive(Debug, Default)]
pub struct UiTree {
    nodes: Vec<Option<Node>>,
    live: usize,
}

impl UiTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node::new(kind)));
        self.live += 1;
        id
    }

    /// Allocate a detached label.
    pub fn add_label(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeKind::Label { text: text.into() })
    }

    /// Allocate a detached container.
    pub fn add_container(&mut self, title: Option<&str>) -> NodeId {
        self.alloc(NodeKind::Container {
            title: title.map(str::to_string),
        })
    }

    /// Allocate a detached collapsible group.
    pub fn add_collapsible(&mut self, title: Option<&str>, expanded: bool) -> NodeId {
        self.alloc(NodeKind::Collapsible {
            title: title.map(str::to_string),
            expanded,
        })
    }

    /// Allocate a detached, empty form.
    pub fn add_form(&mut self) -> NodeId {
        self.alloc(NodeKind::Form)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Whether `id` names a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.nodes.get(id.0), Some(Some(_)))
    }

    pub fn get(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.nodes
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(TreeError::UnknownNode(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node, TreeError> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(TreeError::UnknownNode(id))
    }

    pub fn kind(&self, id: NodeId) -> Result<&NodeKind, TreeError> {
        Ok(self.get(id)?.kind())
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], TreeError> {
        Ok(self.get(id)?.children())
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.get(id)?.parent())
    }

    pub fn is_visible(&self, id: NodeId) -> Result<bool, TreeError> {
        Ok(self.get(id)?.is_visible())
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> Result<(), TreeError> {
        self.get_mut(id)?.visible = visible;
        Ok(())
    }

    /// Set the visibility of `id` and every attached descendant.
    pub fn set_visible_recursive(&mut self, id: NodeId, visible: bool) -> Result<(), TreeError> {
        for node in self.descendants(id)? {
            self.set_visible(node, visible)?;
        }
        Ok(())
    }

    /// Expanded flag of a collapsible; `None` for other kinds.
    pub fn is_expanded(&self, id: NodeId) -> Result<Option<bool>, TreeError> {
        Ok(self.get(id)?.is_expanded())
    }

    /// Fold or unfold a collapsible.
    ///
    /// Returns `true` when the flag actually changed. Other kinds are left
    /// untouched and report `false`.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) -> Result<bool, TreeError> {
        match &mut self.get_mut(id)?.kind {
            NodeKind::Collapsible { expanded: flag, .. } if *flag != expanded => {
                *flag = expanded;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Append a detached node as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let len = self.get(parent)?.children.len();
        self.insert_child(parent, len, child)
    }

    /// Insert a detached node at `position` in `parent`'s child list.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        position: usize,
        child: NodeId,
    ) -> Result<(), TreeError> {
        self.check_attachable(parent, child)?;
        let len = self.get(parent)?.children.len();
        if position > len {
            return Err(TreeError::PositionOutOfRange {
                parent,
                position,
                len,
            });
        }
        self.get_mut(parent)?.children.insert(position, child);
        self.get_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn check_attachable(&self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        if self.get(parent)?.is_label() {
            return Err(TreeError::LeafParent(parent));
        }
        if let Some(current) = self.get(child)?.parent {
            return Err(TreeError::AlreadyAttached {
                child,
                parent: current,
            });
        }
        let mut cursor = Some(parent);
        while let Some(ancestor) = cursor {
            if ancestor == child {
                return Err(TreeError::Cycle { child, parent });
            }
            cursor = self.get(ancestor)?.parent;
        }
        Ok(())
    }

    /// Live position of `child` inside `parent`, matched by identity.
    pub fn position_of(&self, parent: NodeId, child: NodeId) -> Result<Option<usize>, TreeError> {
        Ok(self
            .get(parent)?
            .children
            .iter()
            .position(|&candidate| candidate == child))
    }

    /// Detach `child` from `parent` without destroying it.
    ///
    /// Returns the position the child occupied.
    pub fn detach(&mut self, parent: NodeId, child: NodeId) -> Result<usize, TreeError> {
        let position = self
            .position_of(parent, child)?
            .ok_or(TreeError::NotAChild { child, parent })?;
        self.get_mut(parent)?.children.remove(position);
        self.get_mut(child)?.parent = None;
        Ok(position)
    }

    /// Append a (label, field) row to a form.
    pub fn add_form_row(
        &mut self,
        form: NodeId,
        label: NodeId,
        field: NodeId,
    ) -> Result<(), TreeError> {
        if !self.get(form)?.is_form() {
            return Err(TreeError::NotAForm(form));
        }
        self.append_child(form, label)?;
        self.append_child(form, field)
    }

    /// Currently attached rows of a form, in live order.
    pub fn form_rows(&self, form: NodeId) -> Result<Vec<(NodeId, NodeId)>, TreeError> {
        let node = self.get(form)?;
        if !node.is_form() {
            return Err(TreeError::NotAForm(form));
        }
        if node.children.len() % 2 != 0 {
            return Err(TreeError::UnpairedFormChild {
                form,
                len: node.children.len(),
            });
        }
        Ok(node
            .children
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect())
    }

    /// `id` followed by every attached descendant, in pre-order.
    pub fn descendants(&self, id: NodeId) -> Result<Vec<NodeId>, TreeError> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = self.get(current)?;
            out.push(current);
            stack.extend(node.children.iter().rev().copied());
        }
        Ok(out)
    }

    /// Detach `id` from its parent and free it with all attached descendants.
    ///
    /// Returns the number of nodes freed. Detached subtrees that only a form
    /// controller knows about are not reachable from here; the caller must
    /// free them separately.
    pub fn destroy(&mut self, id: NodeId) -> Result<usize, TreeError> {
        if let Some(parent) = self.get(id)?.parent {
            self.detach(parent, id)?;
        }
        let doomed = self.descendants(id)?;
        for node in &doomed {
            self.nodes[node.0] = None;
        }
        self.live -= doomed.len();
        log::trace!("destroyed {} nodes under {}", doomed.len(), id);
        Ok(doomed.len())
    }
}
