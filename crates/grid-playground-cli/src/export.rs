use std::fs;
use std::path::{Path, PathBuf};

use grid_playground_engine::{Layout, MarkupOptions};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Export target is a directory: {0}")]
    IsDirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the layout's markup to a file, creating parent directories.
///
/// The file gets a trailing newline; the in-memory markup does not.
pub fn export_markup(
    layout: &Layout,
    path: &Path,
    options: &MarkupOptions,
) -> Result<(), ExportError> {
    if path.is_dir() {
        return Err(ExportError::IsDirectory(path.to_path_buf()));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut markup = layout.markup_with(options);
    markup.push('\n');
    fs::write(path, markup)?;
    log::info!("exported markup to {}", path.display());
    Ok(())
}
