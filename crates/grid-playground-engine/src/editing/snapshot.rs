use serde::Serialize;

use crate::editing::Layout;
use crate::models::{ColumnId, ContainerType, RowId};
use crate::render::{
    ColumnLabel, column_label, resolve_column_classes, resolve_row_classes, row_label,
};

/// Immutable view of a layout for rendering the live preview.
///
/// Front ends draw from snapshots and never touch the layout directly. Every
/// class list is resolved up front and the selection is baked in as `active`
/// flags, so a renderer needs no other state.
///
/// ```rust
/// # use grid_playground_engine::Layout;
/// let mut layout = Layout::new();
/// layout.select_column(0, 1).unwrap();
/// let snapshot = layout.snapshot();
/// for row in &snapshot.rows {
///     for col in &row.columns {
///         println!("{} {} active={}", row.label, col.label.primary, col.active);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Layout version for change detection
    pub version: u64,
    pub container_type: ContainerType,
    pub container_class: &'static str,
    pub rows: Vec<RenderRow>,
}

impl Snapshot {
    /// True when the layout has no rows (front ends show an empty-state hint)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// UI-ready row with stable identity and resolved classes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRow {
    pub id: RowId,
    pub index: usize,
    pub classes: Vec<String>,
    pub label: String,
    pub active: bool,
    pub columns: Vec<RenderColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderColumn {
    pub id: ColumnId,
    pub index: usize,
    pub classes: Vec<String>,
    pub label: ColumnLabel,
    /// Index into the front end's column palette
    pub color_index: u8,
    /// Explicit CSS height, preview only
    pub height: Option<String>,
    pub active: bool,
}

pub(crate) fn create_snapshot(layout: &Layout) -> Snapshot {
    let selection = layout.selection_tracker();

    let rows = layout
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| RenderRow {
            id: row.id(),
            index,
            classes: resolve_row_classes(row),
            label: row_label(row),
            active: selection.is_row_selected(row.id()),
            columns: row
                .columns()
                .iter()
                .enumerate()
                .map(|(index, column)| RenderColumn {
                    id: column.id(),
                    index,
                    classes: resolve_column_classes(column),
                    label: column_label(column),
                    color_index: column.color_index(),
                    height: column.height().map(|h| h.as_str().to_string()),
                    active: selection.is_column_selected(column.id()),
                })
                .collect(),
        })
        .collect();

    Snapshot {
        version: layout.version(),
        container_type: layout.container_type(),
        container_class: layout.container_type().class(),
        rows,
    }
}
