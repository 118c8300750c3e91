//! Typed error types for the search engine.
//!
//! Search has no I/O, so every variant here describes structural misuse by the
//! host: a stale node id, a form that was reshaped behind the controller's
//! back, or an out-of-range row index. The engine stops at the first one
//! instead of continuing with a corrupted row order.

use settings_search_tree::{NodeId, TreeError};
use thiserror::Error;

/// Errors returned by the search engine and form row controllers.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A tree primitive failed (unknown node, bad attachment, malformed form).
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// A row index outside `0..row_count` was passed to a form controller.
    #[error("row {index} out of range for form {form} with {len} rows")]
    RowOutOfRange {
        /// Form whose controller was addressed.
        form: NodeId,
        /// Requested original-order index.
        index: usize,
        /// Number of rows the controller owns.
        len: usize,
    },

    /// A row the controller believes is attached is missing from the form,
    /// or its field no longer follows its label.
    #[error("row {index} of form {form} is not attached where expected")]
    RowNotAttached {
        /// Form whose live children disagree with the controller.
        form: NodeId,
        /// Original-order index of the row.
        index: usize,
    },

    /// A form was visited without a controller in the index.
    #[error("no row controller registered for form {0}")]
    MissingController(NodeId),
}
