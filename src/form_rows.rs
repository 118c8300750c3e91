//! Order-preserving row visibility for form containers.
//!
//! Form layouts reserve spacing for every attached row, even one whose widgets
//! are hidden, so filtered rows are physically detached from the form and
//! reattached later. The controller remembers each row's original index so a
//! reattached row always lands back between its original neighbours.

use crate::error::SearchError;
use settings_search_tree::{NodeId, UiTree};

/// One (label, field) row of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRow {
    /// Label-side subtree; its live position identifies the row.
    pub label: NodeId,
    /// Field-side subtree, always attached directly after the label.
    pub field: NodeId,
    /// Position among all rows when the controller was created.
    pub original_index: usize,
    /// Whether the row is currently attached to the form.
    pub visible: bool,
}

/// Row controller for exactly one form.
#[derive(Debug, Clone)]
pub struct FormRowVisibility {
    form: NodeId,
    rows: Vec<FormRow>,
}

impl FormRowVisibility {
    /// Record the form's current rows as the original order.
    ///
    /// Must run before any row of the form is hidden, otherwise the hidden
    /// rows are simply forgotten.
    pub fn snapshot(tree: &UiTree, form: NodeId) -> Result<Self, SearchError> {
        let rows: Vec<FormRow> = tree
            .form_rows(form)?
            .into_iter()
            .enumerate()
            .map(|(original_index, (label, field))| FormRow {
                label,
                field,
                original_index,
                visible: true,
            })
            .collect();
        log::debug!("snapshot of form {} with {} rows", form, rows.len());
        Ok(Self { form, rows })
    }

    /// The form this controller owns.
    pub fn form(&self) -> NodeId {
        self.form
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All rows in original order.
    pub fn rows(&self) -> &[FormRow] {
        &self.rows
    }

    fn row(&self, index: usize) -> Result<FormRow, SearchError> {
        self.rows
            .get(index)
            .copied()
            .ok_or(SearchError::RowOutOfRange {
                form: self.form,
                index,
                len: self.rows.len(),
            })
    }

    /// Label node of the row at original-order `index`.
    pub fn row_label(&self, index: usize) -> Result<NodeId, SearchError> {
        Ok(self.row(index)?.label)
    }

    /// Field node of the row at original-order `index`.
    pub fn row_field(&self, index: usize) -> Result<NodeId, SearchError> {
        Ok(self.row(index)?.field)
    }

    pub fn is_row_visible(&self, index: usize) -> Result<bool, SearchError> {
        Ok(self.row(index)?.visible)
    }

    /// Label nodes of every row, in original order.
    pub fn row_labels(&self) -> Vec<NodeId> {
        self.rows.iter().map(|row| row.label).collect()
    }

    /// Original indices of the rows currently attached.
    pub fn attached_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .filter(|row| row.visible)
            .map(|row| row.original_index)
            .collect()
    }

    /// Label and field nodes of every detached row.
    ///
    /// Nothing in the tree references these nodes, so whoever tears the form
    /// down has to free them explicitly.
    pub fn detached_nodes(&self) -> Vec<NodeId> {
        self.rows
            .iter()
            .filter(|row| !row.visible)
            .flat_map(|row| [row.label, row.field])
            .collect()
    }

    /// Attach or detach the row at original-order `index`.
    ///
    /// Returns `true` if the attachment changed; asking for the state the row
    /// is already in is a no-op.
    pub fn set_row_visible(
        &mut self,
        tree: &mut UiTree,
        index: usize,
        visible: bool,
    ) -> Result<bool, SearchError> {
        let row = self.row(index)?;
        if row.visible == visible {
            return Ok(false);
        }

        if visible {
            self.show_row(tree, row)?;
        } else {
            self.hide_row(tree, row)?;
        }
        self.rows[index].visible = visible;
        log::trace!(
            "form {} row {} {}",
            self.form,
            index,
            if visible { "attached" } else { "detached" }
        );
        Ok(true)
    }

    /// Live position of an attached row's label, checked by identity.
    fn live_position(&self, tree: &UiTree, row: FormRow) -> Result<usize, SearchError> {
        let not_attached = SearchError::RowNotAttached {
            form: self.form,
            index: row.original_index,
        };
        let Some(position) = tree.position_of(self.form, row.label)? else {
            return Err(not_attached);
        };
        if tree.children(self.form)?.get(position + 1) != Some(&row.field) {
            return Err(not_attached);
        }
        Ok(position)
    }

    fn show_row(&self, tree: &mut UiTree, row: FormRow) -> Result<(), SearchError> {
        let preceding = self.rows[..row.original_index]
            .iter()
            .rev()
            .find(|candidate| candidate.visible);
        let position = match preceding {
            Some(&previous) => self.live_position(tree, previous)? + 2,
            None => 0,
        };

        tree.insert_child(self.form, position, row.label)?;
        if let Err(err) = tree.insert_child(self.form, position + 1, row.field) {
            // Leave the form as it was so the row stays consistently hidden.
            tree.detach(self.form, row.label)?;
            return Err(err.into());
        }

        // Content hidden on detach comes back; the current pass re-applies
        // any nested filtering afterwards.
        tree.set_visible_recursive(row.label, true)?;
        tree.set_visible_recursive(row.field, true)?;
        Ok(())
    }

    fn hide_row(&self, tree: &mut UiTree, row: FormRow) -> Result<(), SearchError> {
        self.live_position(tree, row)?;

        tree.set_visible_recursive(row.label, false)?;
        tree.set_visible_recursive(row.field, false)?;

        tree.detach(self.form, row.label)?;
        tree.detach(self.form, row.field)?;
        Ok(())
    }
}
