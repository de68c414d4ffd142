//! Selection tracking.
//!
//! The tracker stores the *identity* of the selected row or column, not its
//! position. Positions are looked up on read, so inserting, deleting or
//! reordering other entities never leaves the selection pointing at the
//! wrong place. Only removing (or moving away) the selected entity itself
//! clears it.

use serde::Serialize;

use crate::models::{ColumnId, Row, RowId};

/// The entity that currently has editing focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Selected {
    Row(RowId),
    Column(ColumnId),
}

/// Where the selected entity sits right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SelectionTarget {
    Row { row: usize },
    Column { row: usize, col: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: Option<Selected>,
}

impl SelectionTracker {
    pub fn selected(&self) -> Option<Selected> {
        self.selected
    }

    pub fn is_row_selected(&self, id: RowId) -> bool {
        self.selected == Some(Selected::Row(id))
    }

    pub fn is_column_selected(&self, id: ColumnId) -> bool {
        self.selected == Some(Selected::Column(id))
    }

    /// Resolve the selection against the current rows.
    ///
    /// Returns `None` when nothing is selected or the entity no longer exists.
    pub fn resolve(&self, rows: &[Row]) -> Option<SelectionTarget> {
        match self.selected? {
            Selected::Row(id) => rows
                .iter()
                .position(|r| r.id() == id)
                .map(|row| SelectionTarget::Row { row }),
            Selected::Column(id) => rows.iter().enumerate().find_map(|(row, r)| {
                r.position_of(id)
                    .map(|col| SelectionTarget::Column { row, col })
            }),
        }
    }

    pub(crate) fn select(&mut self, selected: Selected) {
        self.selected = Some(selected);
    }

    pub(crate) fn clear(&mut self) {
        self.selected = None;
    }

    /// A row is going away: drop the selection if it is that row or one of
    /// its columns
    pub(crate) fn forget_row(&mut self, row: &Row) {
        let affected = match self.selected {
            Some(Selected::Row(id)) => id == row.id(),
            Some(Selected::Column(id)) => row.position_of(id).is_some(),
            None => false,
        };
        if affected {
            self.clear();
        }
    }

    /// A column is leaving editable focus (deleted or moved to another row)
    pub(crate) fn forget_column(&mut self, id: ColumnId) {
        if self.is_column_selected(id) {
            self.clear();
        }
    }
}
