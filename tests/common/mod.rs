//! Shared integration test helpers for settings-search.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{network_form, live_labels};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers is used per file.

#![allow(dead_code)]

use settings_search::{NodeId, UiTree};

/// Form with one row per label text; each field is an untitled container.
pub fn form_with_rows(tree: &mut UiTree, labels: &[&str]) -> NodeId {
    let form = tree.add_form();
    for text in labels {
        let label = tree.add_label(*text);
        let field = tree.add_container(None);
        tree.add_form_row(form, label, field).expect("form row");
    }
    form
}

/// The Address / Port / Timeout form used by the reinsertion scenarios.
pub fn network_form(tree: &mut UiTree) -> NodeId {
    form_with_rows(tree, &["Address", "Port", "Timeout"])
}

/// Label texts of the rows currently attached to `form`, in live order.
pub fn live_labels(tree: &UiTree, form: NodeId) -> Vec<String> {
    tree.form_rows(form)
        .expect("form rows")
        .into_iter()
        .map(|(label, _)| label_text(tree, label))
        .collect()
}

pub fn label_text(tree: &UiTree, label: NodeId) -> String {
    tree.get(label)
        .expect("live node")
        .text()
        .expect("label node")
        .to_string()
}

/// Visibility, expansion, and child order of every node reachable from
/// `roots`, for comparing tree states.
pub fn tree_state(tree: &UiTree, roots: &[NodeId]) -> Vec<(NodeId, bool, Option<bool>, Vec<NodeId>)> {
    roots
        .iter()
        .flat_map(|root| tree.descendants(*root).expect("descendants"))
        .map(|id| {
            let node = tree.get(id).expect("live node");
            (
                id,
                node.is_visible(),
                node.is_expanded(),
                node.children().to_vec(),
            )
        })
        .collect()
}

/// A small settings screen:
///
/// ```text
/// [collapsible "Switchboard Settings", folded]
///   form: Address | Port | Timeout
///   [container "Multi-User Server"]
///     label "Server Name"
///     label "Command Line Arguments"
///     label "Auto Join"
/// [collapsible "nDisplay Settings", folded]
///   form: Config Path | Transport Path
/// ```
pub struct SettingsScreen {
    pub tree: UiTree,
    pub roots: Vec<NodeId>,
    pub general: NodeId,
    pub general_form: NodeId,
    pub server: NodeId,
    pub ndisplay: NodeId,
    pub ndisplay_form: NodeId,
}

pub fn settings_screen() -> SettingsScreen {
    let mut tree = UiTree::new();

    let general = tree.add_collapsible(Some("Switchboard Settings"), false);
    let general_form = network_form(&mut tree);
    tree.append_child(general, general_form).expect("attach");

    let server = tree.add_container(Some("Multi-User Server"));
    for text in ["Server Name", "Command Line Arguments", "Auto Join"] {
        let label = tree.add_label(text);
        tree.append_child(server, label).expect("attach");
    }
    tree.append_child(general, server).expect("attach");

    let ndisplay = tree.add_collapsible(Some("nDisplay Settings"), false);
    let ndisplay_form = form_with_rows(&mut tree, &["Config Path", "Transport Path"]);
    tree.append_child(ndisplay, ndisplay_form).expect("attach");

    SettingsScreen {
        roots: vec![general, ndisplay],
        tree,
        general,
        general_form,
        server,
        ndisplay,
        ndisplay_form,
    }
}
