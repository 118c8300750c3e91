//! Free-text search over settings screens.
//!
//! Given a tree of labels, containers, forms, and collapsible groups (see
//! [`settings_search_tree`]), the engine hides every branch whose text does not
//! match the query. Form rows are detached rather than hidden so the layout
//! does not keep space for them, and always come back in their original order.
//!
//! - [`matcher`]: whitespace-split, case-folded AND matching
//! - [`FormRowVisibility`]: order-preserving row show/hide for one form
//! - [`SearchIndex`]: per-form controller cache
//! - [`SearchEngine`]: the recursive match-and-propagate pass
//! - [`SettingsSearch`]: roots, last query, expand-all, and teardown for a dialog

pub mod cli;
pub mod debug;
pub mod engine;
mod error;
pub mod form_rows;
pub mod matcher;
pub mod search_index;
pub mod session;

pub use engine::SearchEngine;
pub use error::SearchError;
pub use form_rows::{FormRow, FormRowVisibility};
pub use search_index::SearchIndex;
pub use session::SettingsSearch;

// Re-export the crates hosts need alongside the engine
pub use settings_search_config::{self as config, SearchConfig};
pub use settings_search_tree::{self as tree, Layout, NodeId, NodeKind, UiTree};
