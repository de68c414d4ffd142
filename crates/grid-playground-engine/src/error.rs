/// Errors returned by layout mutations.
///
/// No mutation partially applies: when one of these comes back the layout is
/// exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Row {index} does not exist (layout has {len} rows)")]
    RowIndex { index: usize, len: usize },

    #[error("Column {index} does not exist in row {row} (row has {len} columns)")]
    ColumnIndex { row: usize, index: usize, len: usize },

    #[error("Row {row} already has {max} columns; the grid has {max} column slots")]
    CapacityExceeded { row: usize, max: usize },

    #[error("Invalid value {value:?} for {field}")]
    InvalidValue { field: &'static str, value: String },
}

impl LayoutError {
    /// True for the out-of-bounds variants, which always indicate a caller bug
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            LayoutError::RowIndex { .. } | LayoutError::ColumnIndex { .. }
        )
    }

    pub(crate) fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        LayoutError::InvalidValue {
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_errors_are_grouped() {
        assert!(LayoutError::RowIndex { index: 3, len: 1 }.is_index_error());
        assert!(
            LayoutError::ColumnIndex {
                row: 0,
                index: 5,
                len: 2
            }
            .is_index_error()
        );
        assert!(!LayoutError::CapacityExceeded { row: 0, max: 12 }.is_index_error());
        assert!(!LayoutError::invalid("gutter", "9").is_index_error());
    }

    #[test]
    fn test_messages_are_user_facing() {
        let err = LayoutError::CapacityExceeded { row: 1, max: 12 };
        assert_eq!(
            err.to_string(),
            "Row 1 already has 12 columns; the grid has 12 column slots"
        );

        let err = LayoutError::invalid("offset", "12");
        assert_eq!(err.to_string(), "Invalid value \"12\" for offset");
    }
}
