//! Plain-text outline of what a tree would render.

use crate::error::TreeError;
use crate::node::{NodeId, NodeKind};
use crate::tree::UiTree;
use std::fmt::Write;

impl UiTree {
    /// Render `root` as an indented outline, one node per line.
    ///
    /// Hidden nodes are skipped unless `show_hidden` is set, in which case they
    /// are printed with a `(hidden)` marker. Content of a folded collapsible is
    /// never printed.
    pub fn outline(&self, root: NodeId, show_hidden: bool) -> Result<String, TreeError> {
        let mut out = String::new();
        self.outline_into(root, 0, show_hidden, &mut out)?;
        Ok(out)
    }

    fn outline_into(
        &self,
        id: NodeId,
        depth: usize,
        show_hidden: bool,
        out: &mut String,
    ) -> Result<(), TreeError> {
        let node = self.get(id)?;
        if !node.is_visible() && !show_hidden {
            return Ok(());
        }

        let indent = "  ".repeat(depth);
        let _ = match node.kind() {
            NodeKind::Label { text } => write!(out, "{indent}label {text:?}"),
            NodeKind::Form => write!(out, "{indent}form"),
            NodeKind::Container { title } => match title {
                Some(title) => write!(out, "{indent}container {title:?}"),
                None => write!(out, "{indent}container"),
            },
            NodeKind::Collapsible { title, expanded } => {
                let marker = if *expanded { "[-]" } else { "[+]" };
                match title {
                    Some(title) => write!(out, "{indent}{marker} {title:?}"),
                    None => write!(out, "{indent}{marker}"),
                }
            }
        };
        if !node.is_visible() {
            out.push_str(" (hidden)");
        }
        out.push('\n');

        if node.is_expanded() == Some(false) {
            return Ok(());
        }
        for &child in node.children() {
            self.outline_into(child, depth + 1, show_hidden, out)?;
        }
        Ok(())
    }
}
