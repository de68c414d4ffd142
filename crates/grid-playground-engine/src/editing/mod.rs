/*!
 * # Editing Core
 *
 * The [`Layout`] aggregate is the single source of truth for a grid being
 * edited. Everything else in this module exists to change it safely or to
 * read it without exposing its internals.
 *
 * ## Architecture Overview
 *
 * ### Command-Based Editing
 * - Every edit is either a direct `Layout` method call or a [`Cmd`] passed to
 *   [`Layout::apply`], which returns a [`Patch`] describing the affected rows
 * - Mutations validate first and apply atomically; a rejected edit leaves the
 *   layout and its version untouched
 *
 * ### Stable Identity
 * - Rows and columns carry a UUID assigned at creation
 * - The selection stores that identity, so it follows its entity through
 *   reorders and deletions of siblings
 *
 * ### Read API: Immutable Snapshots
 * - [`Layout::snapshot`] produces [`RenderRow`]s and [`RenderColumn`]s with
 *   resolved classes and `active` flags
 * - [`Layout::markup`] produces exportable HTML text
 *
 * ## Usage Pattern
 *
 * ```rust
 * use grid_playground_engine::{Breakpoint, Cmd, ColumnProp, Layout};
 *
 * let mut layout = Layout::new();
 * let patch = layout
 *     .apply(Cmd::UpdateColumn {
 *         row: 0,
 *         col: 0,
 *         prop: ColumnProp::Width,
 *         breakpoint: Breakpoint::Lg,
 *         value: "3".to_string(),
 *     })
 *     .unwrap();
 * assert_eq!(patch.changed_rows, vec![0]);
 *
 * let snapshot = layout.snapshot();
 * assert_eq!(snapshot.rows[0].columns[0].classes, vec!["col-lg-3"]);
 * ```
 */

pub mod commands;
pub mod layout;
pub mod patch;
pub mod selection;
pub mod snapshot;

pub use commands::{Cmd, ColumnProp, RowField};
pub use layout::Layout;
pub use patch::Patch;
pub use selection::{Selected, SelectionTarget, SelectionTracker};
pub use snapshot::{RenderColumn, RenderRow, Snapshot};
