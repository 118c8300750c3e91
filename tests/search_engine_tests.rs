//! Integration tests for the search engine.
//!
//! These tests run whole search passes over small settings screens and check
//! the visibility flags, expansion state, and form row order left behind.

mod common;

use common::{form_with_rows, live_labels, network_form, settings_screen, tree_state};
use settings_search::{SearchConfig, SearchEngine, UiTree};

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

#[test]
fn empty_query_shows_everything() {
    let mut screen = settings_screen();
    let mut engine = SearchEngine::default();

    engine.search(&mut screen.tree, "timeout", &screen.roots).unwrap();
    let visible = engine.search(&mut screen.tree, "", &screen.roots).unwrap();
    assert_eq!(visible, vec![true, true]);

    for (id, is_visible, _, _) in tree_state(&screen.tree, &screen.roots) {
        assert!(is_visible, "node {id} should be visible for the empty query");
    }
    assert_eq!(
        live_labels(&screen.tree, screen.general_form),
        vec!["Address", "Port", "Timeout"]
    );
}

#[test]
fn every_term_must_occur_in_the_same_text() {
    let mut screen = settings_screen();
    let mut engine = SearchEngine::default();

    let visible = engine
        .search(&mut screen.tree, "port path", &screen.roots)
        .unwrap();
    assert_eq!(visible, vec![false, true]);
    assert_eq!(
        live_labels(&screen.tree, screen.ndisplay_form),
        vec!["Transport Path"]
    );
    assert!(live_labels(&screen.tree, screen.general_form).is_empty());
}

#[test]
fn matching_ignores_case_by_default() {
    let mut screen = settings_screen();
    let mut engine = SearchEngine::default();

    engine.search(&mut screen.tree, "TIMEOUT", &screen.roots).unwrap();
    assert_eq!(
        live_labels(&screen.tree, screen.general_form),
        vec!["Timeout"]
    );
}

#[test]
fn case_sensitive_config_is_honoured() {
    let mut screen = settings_screen();
    let mut engine = SearchEngine::new(SearchConfig {
        case_sensitive: true,
        ..SearchConfig::default()
    });

    let visible = engine.search(&mut screen.tree, "TIMEOUT", &screen.roots).unwrap();
    assert_eq!(visible, vec![false, false]);
    let visible = engine.search(&mut screen.tree, "Timeout", &screen.roots).unwrap();
    assert_eq!(visible, vec![true, false]);
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

#[test]
fn title_match_keeps_whole_container() {
    let mut tree = UiTree::new();
    let network = tree.add_container(Some("Network"));
    let foo = tree.add_label("Foo");
    let bar = tree.add_label("Bar");
    tree.append_child(network, foo).unwrap();
    tree.append_child(network, bar).unwrap();
    let mut engine = SearchEngine::default();

    let visible = engine.search(&mut tree, "network", &[network]).unwrap();
    assert_eq!(visible, vec![true]);
    assert!(tree.is_visible(network).unwrap());
    assert!(tree.is_visible(foo).unwrap());
    assert!(tree.is_visible(bar).unwrap());
}

#[test]
fn title_match_restores_hidden_form_rows() {
    let mut screen = settings_screen();
    let mut engine = SearchEngine::default();

    engine.search(&mut screen.tree, "config", &screen.roots).unwrap();
    assert_eq!(
        live_labels(&screen.tree, screen.ndisplay_form),
        vec!["Config Path"]
    );

    engine.search(&mut screen.tree, "ndisplay", &screen.roots).unwrap();
    assert_eq!(
        live_labels(&screen.tree, screen.ndisplay_form),
        vec!["Config Path", "Transport Path"]
    );
    assert!(screen.tree.is_visible(screen.ndisplay_form).unwrap());
}

#[test]
fn sibling_of_title_matched_container_is_filtered() {
    let mut screen = settings_screen();
    let mut engine = SearchEngine::default();

    engine.search(&mut screen.tree, "server", &screen.roots).unwrap();
    assert!(screen.tree.is_visible(screen.server).unwrap());
    for &label in screen.tree.children(screen.server).unwrap() {
        assert!(screen.tree.is_visible(label).unwrap());
    }
    assert!(!screen.tree.is_visible(screen.general_form).unwrap());
    assert!(live_labels(&screen.tree, screen.general_form).is_empty());
    assert!(!screen.tree.is_visible(screen.ndisplay).unwrap());
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

#[test]
fn rows_come_back_in_original_order() {
    let mut tree = UiTree::new();
    let form = network_form(&mut tree);
    let mut engine = SearchEngine::default();

    engine.search(&mut tree, "port", &[form]).unwrap();
    assert_eq!(live_labels(&tree, form), vec!["Port"]);

    engine.search(&mut tree, "", &[form]).unwrap();
    assert_eq!(live_labels(&tree, form), vec!["Address", "Port", "Timeout"]);
}

#[test]
fn rows_reorder_correctly_across_many_queries() {
    let mut tree = UiTree::new();
    let form = form_with_rows(
        &mut tree,
        &["Alpha One", "Beta Two", "Gamma One", "Delta Two", "Epsilon"],
    );
    let mut engine = SearchEngine::default();

    for (query, expected) in [
        ("two", vec!["Beta Two", "Delta Two"]),
        ("one", vec!["Alpha One", "Gamma One"]),
        ("a", vec!["Alpha One", "Beta Two", "Gamma One", "Delta Two"]),
        ("eps", vec!["Epsilon"]),
        ("zzz", vec![]),
        (
            "",
            vec!["Alpha One", "Beta Two", "Gamma One", "Delta Two", "Epsilon"],
        ),
    ] {
        engine.search(&mut tree, query, &[form]).unwrap();
        assert_eq!(live_labels(&tree, form), expected, "query {query:?}");
    }
}

#[test]
fn form_with_no_matching_rows_is_hidden() {
    let mut tree = UiTree::new();
    let form = network_form(&mut tree);
    let mut engine = SearchEngine::default();

    assert_eq!(engine.search(&mut tree, "zzz", &[form]).unwrap(), vec![false]);
    assert!(!tree.is_visible(form).unwrap());
    assert!(tree.children(form).unwrap().is_empty());
}

#[test]
fn nested_form_inside_a_row_is_filtered_on_reattach() {
    let mut tree = UiTree::new();
    let outer = tree.add_form();

    // Row 0 label side is a group holding its own form.
    let label_side = tree.add_container(Some("Advanced"));
    let inner = form_with_rows(&mut tree, &["Advanced Port", "Advanced Timeout"]);
    tree.append_child(label_side, inner).unwrap();
    let field = tree.add_container(None);
    tree.add_form_row(outer, label_side, field).unwrap();

    let plain_label = tree.add_label("Address");
    let plain_field = tree.add_container(None);
    tree.add_form_row(outer, plain_label, plain_field).unwrap();

    let mut engine = SearchEngine::default();

    engine.search(&mut tree, "address", &[outer]).unwrap();
    assert_eq!(tree.children(outer).unwrap(), &[plain_label, plain_field]);

    // Reattaching row 0 must not leave the non-matching inner row visible.
    engine.search(&mut tree, "advanced port", &[outer]).unwrap();
    assert_eq!(tree.children(outer).unwrap(), &[label_side, field]);
    assert_eq!(live_labels(&tree, inner), vec!["Advanced Port"]);
    assert!(tree.is_visible(field).unwrap());
}

// ---------------------------------------------------------------------------
// Collapsible groups
// ---------------------------------------------------------------------------

#[test]
fn matching_content_unfolds_group() {
    let mut screen = settings_screen();
    let mut engine = SearchEngine::default();
    assert_eq!(screen.tree.is_expanded(screen.general).unwrap(), Some(false));

    engine.search(&mut screen.tree, "timeout", &screen.roots).unwrap();
    assert_eq!(screen.tree.is_expanded(screen.general).unwrap(), Some(true));
    assert_eq!(screen.tree.is_expanded(screen.ndisplay).unwrap(), Some(false));
}

#[test]
fn clearing_the_query_never_folds_groups() {
    let mut screen = settings_screen();
    let mut engine = SearchEngine::default();

    engine.search(&mut screen.tree, "timeout", &screen.roots).unwrap();
    engine.search(&mut screen.tree, "", &screen.roots).unwrap();
    assert_eq!(screen.tree.is_expanded(screen.general).unwrap(), Some(true));
}

#[test]
fn empty_query_unfolds_every_visible_group() {
    let mut tree = UiTree::new();
    let advanced = tree.add_collapsible(Some("Advanced"), false);
    let foo = tree.add_label("Foo");
    tree.append_child(advanced, foo).unwrap();
    let mut engine = SearchEngine::default();

    assert_eq!(engine.search(&mut tree, "", &[advanced]).unwrap(), vec![true]);
    assert_eq!(tree.is_expanded(advanced).unwrap(), Some(true));
}

#[test]
fn group_kept_by_ancestor_title_is_unfolded() {
    let mut tree = UiTree::new();
    let network = tree.add_container(Some("Network"));
    let advanced = tree.add_collapsible(Some("Advanced"), false);
    let foo = tree.add_label("Foo");
    tree.append_child(advanced, foo).unwrap();
    tree.append_child(network, advanced).unwrap();
    let mut engine = SearchEngine::default();

    engine.search(&mut tree, "network", &[network]).unwrap();
    assert!(tree.is_visible(advanced).unwrap());
    assert!(tree.is_visible(foo).unwrap());
    assert_eq!(tree.is_expanded(advanced).unwrap(), Some(true));
}

#[test]
fn hidden_group_stays_folded() {
    let mut screen = settings_screen();
    let mut engine = SearchEngine::default();

    engine.search(&mut screen.tree, "transport", &screen.roots).unwrap();
    assert!(!screen.tree.is_visible(screen.general).unwrap());
    assert_eq!(screen.tree.is_expanded(screen.general).unwrap(), Some(false));
}

#[test]
fn auto_expand_can_be_disabled() {
    let mut screen = settings_screen();
    let mut engine = SearchEngine::new(SearchConfig {
        auto_expand: false,
        ..SearchConfig::default()
    });

    engine.search(&mut screen.tree, "timeout", &screen.roots).unwrap();
    assert!(screen.tree.is_visible(screen.general).unwrap());
    assert_eq!(screen.tree.is_expanded(screen.general).unwrap(), Some(false));
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

#[test]
fn repeated_search_leaves_identical_state() {
    for query in ["", "port", "server", "path", "zzz", "switchboard", "auto join"] {
        let mut screen = settings_screen();
        let mut engine = SearchEngine::default();

        let first = engine.search(&mut screen.tree, query, &screen.roots).unwrap();
        let after_first = tree_state(&screen.tree, &screen.roots);
        let first_rows = live_labels(&screen.tree, screen.general_form);

        let second = engine.search(&mut screen.tree, query, &screen.roots).unwrap();
        assert_eq!(first, second, "query {query:?}");
        assert_eq!(
            tree_state(&screen.tree, &screen.roots),
            after_first,
            "query {query:?}"
        );
        assert_eq!(
            live_labels(&screen.tree, screen.general_form),
            first_rows,
            "query {query:?}"
        );
    }
}

#[test]
fn typing_then_retyping_converges() {
    let mut screen = settings_screen();
    let mut engine = SearchEngine::default();

    engine.search(&mut screen.tree, "p", &screen.roots).unwrap();
    let reference = tree_state(&screen.tree, &screen.roots);

    for query in ["po", "por", "port", "por", "po"] {
        engine.search(&mut screen.tree, query, &screen.roots).unwrap();
    }
    engine.search(&mut screen.tree, "p", &screen.roots).unwrap();
    assert_eq!(tree_state(&screen.tree, &screen.roots), reference);
}
