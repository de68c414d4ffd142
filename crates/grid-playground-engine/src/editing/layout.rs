use crate::LayoutError;
use crate::editing::{
    Cmd, ColumnProp, Patch, RowField, Selected, SelectionTarget, SelectionTracker, Snapshot,
};
use crate::models::{
    AlignItems, Breakpoint, COLOR_COUNT, Column, ColumnId, ContainerType, Gutter, Height,
    JustifyContent, MAX_COLUMNS, Offset, OrderToken, Row, RowId, parse_optional, parse_width,
};
use crate::render::MarkupOptions;

/// The single source of truth for a grid being edited.
///
/// Owns every row and column plus the current selection. All mutations are
/// atomic: each validates its indices and values up front and either applies
/// completely or returns an error with the layout untouched.
///
/// ```rust
/// # use grid_playground_engine::{Breakpoint, ColumnProp, Layout};
/// let mut layout = Layout::new();
/// layout
///     .update_column_field(0, 0, ColumnProp::Width, Breakpoint::Md, "8")
///     .unwrap();
/// assert!(layout.markup().contains("class=\"col-md-8\""));
/// ```
#[derive(Debug, Clone)]
pub struct Layout {
    container_type: ContainerType,
    rows: Vec<Row>,
    selection: SelectionTracker,
    /// Incremented on every effective change (enables change detection)
    version: u64,
}

impl Layout {
    /// A fixed-width layout with one default row
    pub fn new() -> Self {
        Self::with_container_type(ContainerType::default())
    }

    pub fn with_container_type(container_type: ContainerType) -> Self {
        Self {
            container_type,
            rows: vec![Row::new()],
            selection: SelectionTracker::default(),
            version: 0,
        }
    }

    // ============ Read API ============

    pub fn container_type(&self) -> ContainerType {
        self.container_type
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Result<&Row, LayoutError> {
        self.rows.get(row).ok_or(LayoutError::RowIndex {
            index: row,
            len: self.rows.len(),
        })
    }

    pub fn column(&self, row: usize, col: usize) -> Result<&Column, LayoutError> {
        let r = self.row(row)?;
        r.column(col).ok_or(LayoutError::ColumnIndex {
            row,
            index: col,
            len: r.len(),
        })
    }

    /// Current position of the selected entity, if any
    pub fn selection(&self) -> Option<SelectionTarget> {
        self.selection.resolve(&self.rows)
    }

    pub fn selected(&self) -> Option<Selected> {
        self.selection.selected()
    }

    pub(crate) fn selection_tracker(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn snapshot(&self) -> Snapshot {
        crate::editing::snapshot::create_snapshot(self)
    }

    /// Markup for the whole layout with default formatting
    pub fn markup(&self) -> String {
        crate::render::generate_markup(self)
    }

    pub fn markup_with(&self, options: &MarkupOptions) -> String {
        crate::render::generate_markup_with(self, options)
    }

    /// Apply a command, returning what changed
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, LayoutError> {
        crate::editing::commands::execute(self, cmd)
    }

    // ============ Structure ============

    /// Append a default row (two seed columns)
    pub fn add_row(&mut self) -> RowId {
        let row = Row::new();
        let id = row.id();
        self.rows.push(row);
        self.touch();
        log::debug!("added row {} ({id:?})", self.rows.len() - 1);
        id
    }

    /// Remove a row and every column in it
    pub fn delete_row(&mut self, row: usize) -> Result<Row, LayoutError> {
        self.row(row)?;
        self.selection.forget_row(&self.rows[row]);
        let removed = self.rows.remove(row);
        self.touch();
        log::debug!("deleted row {row} ({:?})", removed.id());
        Ok(removed)
    }

    /// Append a column to a row. Its color continues the row's color cycle.
    pub fn add_column(&mut self, row: usize) -> Result<ColumnId, LayoutError> {
        let r = self.row(row)?;
        if r.is_full() {
            log::warn!("rejected add column: row {row} already has {MAX_COLUMNS} columns");
            return Err(LayoutError::CapacityExceeded {
                row,
                max: MAX_COLUMNS,
            });
        }

        let color_index = (r.len() % COLOR_COUNT as usize) as u8;
        let column = Column::new(color_index);
        let id = column.id();
        self.rows[row].columns_mut().push(column);
        self.touch();
        log::debug!("added column to row {row} ({id:?})");
        Ok(id)
    }

    pub fn delete_column(&mut self, row: usize, col: usize) -> Result<Column, LayoutError> {
        self.column(row, col)?;
        let removed = self.rows[row].columns_mut().remove(col);
        self.selection.forget_column(removed.id());
        self.touch();
        log::debug!("deleted column {col} from row {row} ({:?})", removed.id());
        Ok(removed)
    }

    /// Move a column so it lands before the column currently at
    /// (`to_row`, `to_col`). `to_col` may equal the target row's length to
    /// append.
    ///
    /// Within a row the insertion index accounts for the gap left by the
    /// removed column. Moving into a different row that is already full is
    /// rejected without changing either row. A selected column keeps its
    /// selection when reordered within its row and loses it when it moves to
    /// another row.
    pub fn move_column(
        &mut self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> Result<(), LayoutError> {
        self.column(from_row, from_col)?;
        let target_len = self.row(to_row)?.len();
        if to_col > target_len {
            return Err(LayoutError::ColumnIndex {
                row: to_row,
                index: to_col,
                len: target_len,
            });
        }

        if from_row == to_row {
            if from_col == to_col {
                return Ok(());
            }
            let columns = self.rows[from_row].columns_mut();
            let column = columns.remove(from_col);
            let insert_at = if from_col < to_col { to_col - 1 } else { to_col };
            columns.insert(insert_at, column);
            log::debug!("moved column {from_col} to {insert_at} within row {from_row}");
        } else {
            if self.rows[to_row].is_full() {
                log::warn!("rejected column move: row {to_row} already has {MAX_COLUMNS} columns");
                return Err(LayoutError::CapacityExceeded {
                    row: to_row,
                    max: MAX_COLUMNS,
                });
            }
            let column = self.rows[from_row].columns_mut().remove(from_col);
            self.selection.forget_column(column.id());
            self.rows[to_row].columns_mut().insert(to_col, column);
            log::debug!("moved column {from_row}:{from_col} to {to_row}:{to_col}");
        }

        self.touch();
        Ok(())
    }

    // ============ Selection ============

    pub fn select_row(&mut self, row: usize) -> Result<(), LayoutError> {
        let id = self.row(row)?.id();
        self.set_selected(Some(Selected::Row(id)));
        Ok(())
    }

    pub fn select_column(&mut self, row: usize, col: usize) -> Result<(), LayoutError> {
        let id = self.column(row, col)?.id();
        self.set_selected(Some(Selected::Column(id)));
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.set_selected(None);
    }

    fn set_selected(&mut self, selected: Option<Selected>) {
        if self.selection.selected() == selected {
            return;
        }
        match selected {
            Some(selected) => self.selection.select(selected),
            None => self.selection.clear(),
        }
        self.touch();
    }

    // ============ Field updates ============

    /// Set a row property from its textual value; empty clears it
    pub fn update_row_field(
        &mut self,
        row: usize,
        field: RowField,
        value: &str,
    ) -> Result<(), LayoutError> {
        self.row(row)?;

        // Parse before borrowing mutably so a bad value changes nothing
        enum Parsed {
            GutterX(Option<Gutter>),
            GutterY(Option<Gutter>),
            Align(Option<AlignItems>),
            Justify(Option<JustifyContent>),
        }
        let parsed = match field {
            RowField::GutterX => Parsed::GutterX(parse_optional(value)?),
            RowField::GutterY => Parsed::GutterY(parse_optional(value)?),
            RowField::AlignItems => Parsed::Align(parse_optional(value)?),
            RowField::JustifyContent => Parsed::Justify(parse_optional(value)?),
        };

        let r = &mut self.rows[row];
        match parsed {
            Parsed::GutterX(v) => r.set_gutter_x(v),
            Parsed::GutterY(v) => r.set_gutter_y(v),
            Parsed::Align(v) => r.set_align_items(v),
            Parsed::Justify(v) => r.set_justify_content(v),
        };
        self.touch();
        Ok(())
    }

    /// Set a column's width, offset or order at one breakpoint; empty clears it
    pub fn update_column_field(
        &mut self,
        row: usize,
        col: usize,
        prop: ColumnProp,
        breakpoint: Breakpoint,
        value: &str,
    ) -> Result<(), LayoutError> {
        self.column(row, col)?;

        enum Parsed {
            Width(Option<crate::models::WidthToken>),
            Offset(Option<Offset>),
            Order(Option<OrderToken>),
        }
        let parsed = match prop {
            ColumnProp::Width => Parsed::Width(parse_width(value)?),
            ColumnProp::Offset => Parsed::Offset(parse_optional(value)?),
            ColumnProp::Order => Parsed::Order(parse_optional(value)?),
        };

        let column = &mut self.rows[row].columns_mut()[col];
        match parsed {
            Parsed::Width(v) => column.set_width(breakpoint, v),
            Parsed::Offset(v) => column.set_offset(breakpoint, v),
            Parsed::Order(v) => column.set_order(breakpoint, v),
        };
        self.touch();
        Ok(())
    }

    /// Set a column's explicit height (a CSS length); empty clears it
    pub fn update_column_height(
        &mut self,
        row: usize,
        col: usize,
        value: &str,
    ) -> Result<(), LayoutError> {
        self.column(row, col)?;
        let height = parse_optional::<Height>(value)?;
        self.rows[row].columns_mut()[col].set_height(height);
        self.touch();
        Ok(())
    }

    pub fn set_container_type(&mut self, container_type: ContainerType) {
        if self.container_type != container_type {
            self.container_type = container_type;
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}
