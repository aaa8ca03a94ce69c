//! Data validation utilities.

use std::path::Path;

use crate::error::{ToolError, ToolResult};
use crate::loader::load_movement_catalog;

/// Validate all RON data files in a directory.
///
/// Every `.ron` file must parse and resolve. Returns the number of files
/// checked.
///
/// # Errors
///
/// Returns the first failure, or [`ToolError::NoDataFiles`] if the
/// directory holds no `.ron` files.
pub fn validate_data_directory(dir: &Path) -> ToolResult<usize> {
    let entries = std::fs::read_dir(dir).map_err(|e| ToolError::IoError {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ToolError::IoError {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "ron") {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(ToolError::NoDataFiles(dir.display().to_string()));
    }

    for path in &files {
        load_movement_catalog(path)?;
        tracing::info!("Validated {}", path.display());
    }

    Ok(files.len())
}
