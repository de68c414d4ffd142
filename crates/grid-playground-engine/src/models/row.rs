use serde::Serialize;
use uuid::Uuid;

use crate::models::{AlignItems, Column, ColumnId, Gutter, JustifyContent};

/// A row holds at most this many columns
pub const MAX_COLUMNS: usize = 12;

/// Stable identifier for a row, never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RowId(pub Uuid);

impl RowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

/// An ordered run of columns plus row-level spacing and alignment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    id: RowId,
    gutter_x: Option<Gutter>,
    gutter_y: Option<Gutter>,
    align_items: Option<AlignItems>,
    justify_content: Option<JustifyContent>,
    columns: Vec<Column>,
}

impl Row {
    /// A fresh row seeded with two columns colored 0 and 1
    pub fn new() -> Self {
        let mut row = Self::empty();
        row.columns = vec![Column::new(0), Column::new(1)];
        row
    }

    /// A row without any columns
    pub fn empty() -> Self {
        Self {
            id: RowId::new(),
            gutter_x: None,
            gutter_y: None,
            align_items: None,
            justify_content: None,
            columns: Vec::new(),
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn gutter_x(&self) -> Option<Gutter> {
        self.gutter_x
    }

    pub fn gutter_y(&self) -> Option<Gutter> {
        self.gutter_y
    }

    pub fn align_items(&self) -> Option<AlignItems> {
        self.align_items
    }

    pub fn justify_content(&self) -> Option<JustifyContent> {
        self.justify_content
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.columns.len() >= MAX_COLUMNS
    }

    /// Current position of a column within this row
    pub fn position_of(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| c.id() == id)
    }

    pub fn set_gutter_x(&mut self, gutter: Option<Gutter>) -> &mut Self {
        self.gutter_x = gutter;
        self
    }

    pub fn set_gutter_y(&mut self, gutter: Option<Gutter>) -> &mut Self {
        self.gutter_y = gutter;
        self
    }

    pub fn set_align_items(&mut self, align: Option<AlignItems>) -> &mut Self {
        self.align_items = align;
        self
    }

    pub fn set_justify_content(&mut self, justify: Option<JustifyContent>) -> &mut Self {
        self.justify_content = justify;
        self
    }

    pub(crate) fn columns_mut(&mut self) -> &mut Vec<Column> {
        &mut self.columns
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row_has_two_seed_columns() {
        let row = Row::new();
        assert_eq!(row.len(), 2);
        assert_eq!(row.columns()[0].color_index(), 0);
        assert_eq!(row.columns()[1].color_index(), 1);
        assert!(row.gutter_x().is_none());
        assert!(row.align_items().is_none());
    }

    #[test]
    fn test_position_of() {
        let row = Row::new();
        let second = row.columns()[1].id();
        assert_eq!(row.position_of(second), Some(1));
        assert_eq!(row.position_of(ColumnId::new()), None);
    }

    #[test]
    fn test_is_full() {
        let mut row = Row::empty();
        assert!(row.is_empty());
        for i in 0..MAX_COLUMNS {
            assert!(!row.is_full());
            row.columns_mut().push(Column::new(i as u8));
        }
        assert!(row.is_full());
    }
}
