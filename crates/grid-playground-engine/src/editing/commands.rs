use std::str::FromStr;

use crate::LayoutError;
use crate::editing::{Layout, Patch};
use crate::models::{Breakpoint, ContainerType};

/// Row-level property addressed by [`Cmd::UpdateRow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    GutterX,
    GutterY,
    AlignItems,
    JustifyContent,
}

impl FromStr for RowField {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "gx" | "gutter-x" | "gutterx" => Ok(RowField::GutterX),
            "gy" | "gutter-y" | "guttery" => Ok(RowField::GutterY),
            "align" | "align-items" | "alignitems" => Ok(RowField::AlignItems),
            "justify" | "justify-content" | "justifycontent" => Ok(RowField::JustifyContent),
            _ => Err(LayoutError::invalid("row field", s)),
        }
    }
}

/// Per-breakpoint column property addressed by [`Cmd::UpdateColumn`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnProp {
    Width,
    Offset,
    Order,
}

impl FromStr for ColumnProp {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "width" | "widths" => Ok(ColumnProp::Width),
            "offset" | "offsets" => Ok(ColumnProp::Offset),
            "order" | "orders" => Ok(ColumnProp::Order),
            _ => Err(LayoutError::invalid("column property", s)),
        }
    }
}

/// Every mutation a front end can request.
///
/// Values arrive in their textual form; an empty string clears the field.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    AddRow,
    DeleteRow {
        row: usize,
    },
    AddColumn {
        row: usize,
    },
    DeleteColumn {
        row: usize,
        col: usize,
    },
    /// Drop the column at (`from_row`, `from_col`) before the column
    /// currently at (`to_row`, `to_col`)
    MoveColumn {
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    },
    SelectRow {
        row: usize,
    },
    SelectColumn {
        row: usize,
        col: usize,
    },
    ClearSelection,
    UpdateRow {
        row: usize,
        field: RowField,
        value: String,
    },
    UpdateColumn {
        row: usize,
        col: usize,
        prop: ColumnProp,
        breakpoint: Breakpoint,
        value: String,
    },
    SetHeight {
        row: usize,
        col: usize,
        value: String,
    },
    SetContainer {
        container: ContainerType,
    },
}

impl Cmd {
    /// Whether this command only moves editing focus
    pub fn is_selection_change(&self) -> bool {
        matches!(
            self,
            Cmd::SelectRow { .. } | Cmd::SelectColumn { .. } | Cmd::ClearSelection
        )
    }
}

/// Run a command against the layout and describe what changed
pub(crate) fn execute(layout: &mut Layout, cmd: Cmd) -> Result<Patch, LayoutError> {
    let changed_rows = match &cmd {
        Cmd::AddRow => {
            layout.add_row();
            vec![layout.rows().len() - 1]
        }
        Cmd::DeleteRow { row } => {
            layout.delete_row(*row)?;
            Vec::new()
        }
        Cmd::AddColumn { row } => {
            layout.add_column(*row)?;
            vec![*row]
        }
        Cmd::DeleteColumn { row, col } => {
            layout.delete_column(*row, *col)?;
            vec![*row]
        }
        Cmd::MoveColumn {
            from_row,
            from_col,
            to_row,
            to_col,
        } => {
            layout.move_column(*from_row, *from_col, *to_row, *to_col)?;
            if from_row == to_row {
                vec![*from_row]
            } else {
                vec![*from_row, *to_row]
            }
        }
        Cmd::SelectRow { row } => {
            layout.select_row(*row)?;
            Vec::new()
        }
        Cmd::SelectColumn { row, col } => {
            layout.select_column(*row, *col)?;
            Vec::new()
        }
        Cmd::ClearSelection => {
            layout.clear_selection();
            Vec::new()
        }
        Cmd::UpdateRow { row, field, value } => {
            layout.update_row_field(*row, *field, value)?;
            vec![*row]
        }
        Cmd::UpdateColumn {
            row,
            col,
            prop,
            breakpoint,
            value,
        } => {
            layout.update_column_field(*row, *col, *prop, *breakpoint, value)?;
            vec![*row]
        }
        Cmd::SetHeight { row, col, value } => {
            layout.update_column_height(*row, *col, value)?;
            vec![*row]
        }
        Cmd::SetContainer { container } => {
            layout.set_container_type(*container);
            Vec::new()
        }
    };

    log::debug!("applied {cmd:?} -> version {}", layout.version());

    Ok(Patch {
        changed_rows,
        selection: layout.selection(),
        version: layout.version(),
    })
}
