//! Markup generation for a whole layout.
//!
//! Output is a fixed-indentation HTML tree: container, rows, then one
//! placeholder element per column. It re-derives every class from the model
//! and never looks at selection or any rendering state, so repeated calls on
//! an unchanged layout return identical text.

use std::fmt::Write;

use crate::editing::Layout;
use crate::render::{resolve_column_classes, resolve_row_classes};

/// Formatting knobs for generated markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupOptions {
    /// Indentation added per nesting level
    pub indent: String,
    /// Text placed inside every column element
    pub placeholder: String,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            placeholder: "...".to_string(),
        }
    }
}

impl MarkupOptions {
    pub fn with_indent_width(mut self, spaces: usize) -> Self {
        self.indent = " ".repeat(spaces);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// Generate markup with the default formatting
pub fn generate_markup(layout: &Layout) -> String {
    generate_markup_with(layout, &MarkupOptions::default())
}

pub fn generate_markup_with(layout: &Layout, options: &MarkupOptions) -> String {
    let indent = options.indent.as_str();
    let placeholder = html_escape::encode_text(&options.placeholder);
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "<div class=\"{}\">", layout.container_type().class());

    for row in layout.rows() {
        let _ = writeln!(
            out,
            "{indent}<div class=\"{}\">",
            class_attr(&resolve_row_classes(row))
        );

        for column in row.columns() {
            let classes = resolve_column_classes(column);
            let attr = if classes.is_empty() {
                String::new()
            } else {
                format!(" class=\"{}\"", class_attr(&classes))
            };
            let _ = writeln!(out, "{indent}{indent}<div{attr}>{placeholder}</div>");
        }

        let _ = writeln!(out, "{indent}</div>");
    }

    out.push_str("</div>");
    out
}

fn class_attr(classes: &[String]) -> String {
    html_escape::encode_double_quoted_attribute(&classes.join(" ")).into_owned()
}
