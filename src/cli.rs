//! Command-line interface for settings-search.
//!
//! Loads a YAML layout, optionally folds or unfolds every group, then runs
//! each query in turn against one session (as if typed keystroke by
//! keystroke) and prints an outline of what stays visible.

use crate::session::SettingsSearch;
use anyhow::Context;
use clap::Parser;
use settings_search_config::{LogLevel, SearchConfig};
use settings_search_tree::{Layout, UiTree};
use std::io::Write;
use std::path::PathBuf;

/// settings-search - filter a settings layout by free-text search
#[derive(Parser, Debug)]
#[command(name = "settings-search")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML layout describing the settings screen
    #[arg(value_name = "LAYOUT")]
    pub layout: PathBuf,

    /// Queries to run in order; the empty query is run when none is given
    #[arg(value_name = "QUERY")]
    pub queries: Vec<String>,

    /// Config file (default: ~/.config/settings-search/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Write log lines to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print filtered-out nodes too, marked "(hidden)"
    #[arg(long)]
    pub show_hidden: bool,

    /// Fold every group before searching
    #[arg(long, conflicts_with = "expand_all")]
    pub collapse_all: bool,

    /// Unfold every group before searching
    #[arg(long)]
    pub expand_all: bool,
}

/// Load the config named on the command line, or the default one.
pub fn load_config(cli: &Cli) -> anyhow::Result<SearchConfig> {
    match &cli.config {
        Some(path) => SearchConfig::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => SearchConfig::load().context("failed to load default config"),
    }
}

/// Run the searches described by `cli` and write the outlines to `out`.
pub fn execute(cli: &Cli, config: SearchConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&cli.layout)
        .with_context(|| format!("failed to read layout {}", cli.layout.display()))?;
    let layout = Layout::from_yaml_str(&source)
        .with_context(|| format!("invalid layout {}", cli.layout.display()))?;
    let (mut tree, roots) = UiTree::from_layout(&layout)?;
    log::info!(
        "Loaded layout {} ({} roots, {} nodes)",
        cli.layout.display(),
        roots.len(),
        tree.len()
    );

    let mut search = SettingsSearch::with_roots(config, roots);
    if cli.collapse_all {
        search.set_all_expanded(&mut tree, false)?;
    } else if cli.expand_all {
        search.set_all_expanded(&mut tree, true)?;
    }

    let queries: Vec<&str> = if cli.queries.is_empty() {
        vec![""]
    } else {
        cli.queries.iter().map(String::as_str).collect()
    };

    for query in queries {
        let visible = search.search(&mut tree, query)?;
        writeln!(
            out,
            "== {:?}: {} of {} roots visible",
            query,
            visible.iter().filter(|v| **v).count(),
            visible.len()
        )?;
        for &root in search.roots() {
            write!(out, "{}", tree.outline(root, cli.show_hidden)?)?;
        }
    }
    Ok(())
}
