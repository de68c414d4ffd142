//! Read-only projections of a [`Layout`](crate::Layout): class tokens for
//! live rendering and exportable markup text.

pub mod classes;
pub mod markup;

pub use classes::{
    ColumnLabel, NO_COLUMN_CLASS, column_label, resolve_column_classes, resolve_row_classes,
    row_label,
};
pub use markup::{MarkupOptions, generate_markup, generate_markup_with};
