use crate::editing::SelectionTarget;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Rows (post-edit indices) whose own content changed
    pub changed_rows: Vec<usize>,
    pub selection: Option<SelectionTarget>,
    pub version: u64,
}
