//! Class resolution: the CSS class tokens a row or column renders with.
//!
//! Both functions are pure projections of the model. Width inheritance is
//! left to the stylesheet cascade: a breakpoint only produces a class when a
//! value is explicitly set there.

use serde::Serialize;

use crate::models::{Column, Row};

/// Classes for a column: widths, then offsets, then orders, each in
/// ascending breakpoint order.
pub fn resolve_column_classes(column: &Column) -> Vec<String> {
    let widths = column
        .widths()
        .iter()
        .filter_map(|(bp, width)| width.map(|w| w.class(bp)));
    let offsets = column
        .offsets()
        .iter()
        .filter_map(|(bp, offset)| offset.map(|o| o.class(bp)));
    let orders = column
        .orders()
        .iter()
        .filter_map(|(bp, order)| order.map(|o| o.class(bp)));

    widths.chain(offsets).chain(orders).collect()
}

/// Classes for a row: `row`, then gutters, alignment and justification when set
pub fn resolve_row_classes(row: &Row) -> Vec<String> {
    let mut classes = vec!["row".to_string()];
    if let Some(gx) = row.gutter_x() {
        classes.push(format!("gx-{gx}"));
    }
    if let Some(gy) = row.gutter_y() {
        classes.push(format!("gy-{gy}"));
    }
    if let Some(align) = row.align_items() {
        classes.push(align.class().to_string());
    }
    if let Some(justify) = row.justify_content() {
        classes.push(justify.class().to_string());
    }
    classes
}

/// Short selector-style caption for a row, e.g. `.row .gx-2`
pub fn row_label(row: &Row) -> String {
    let mut label = String::from(".row");
    if let Some(gx) = row.gutter_x() {
        label.push_str(&format!(" .gx-{gx}"));
    }
    if let Some(gy) = row.gutter_y() {
        label.push_str(&format!(" .gy-{gy}"));
    }
    label
}

/// Caption shown on a column: its leading class and the rest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnLabel {
    pub primary: String,
    pub secondary: String,
}

pub const NO_COLUMN_CLASS: &str = "(no col class)";

pub fn column_label(column: &Column) -> ColumnLabel {
    let classes = resolve_column_classes(column);
    match classes.split_first() {
        Some((first, rest)) => ColumnLabel {
            primary: first.clone(),
            secondary: rest.join(" "),
        },
        None => ColumnLabel {
            primary: NO_COLUMN_CLASS.to_string(),
            secondary: String::new(),
        },
    }
}
