//! Reading movement data files.

use std::path::Path;

use terrain_core::catalog::MovementCatalog;
use terrain_core::data::MovementData;

use crate::error::{ToolError, ToolResult};

/// Parse a movement data file without resolving it.
pub fn load_movement_data(path: &Path) -> ToolResult<MovementData> {
    let source = std::fs::read_to_string(path).map_err(|e| ToolError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    ron::from_str(&source).map_err(|e| ToolError::ParseError {
        path: path.display().to_string(),
        source: e,
    })
}

/// Parse and resolve a movement data file.
pub fn load_movement_catalog(path: &Path) -> ToolResult<MovementCatalog> {
    let data = load_movement_data(path)?;
    let catalog = data.resolve().map_err(|e| ToolError::ValidationError {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::debug!(
        "Loaded {} terrains and {} agent kinds from {}",
        catalog.terrains.len(),
        catalog.kinds.len(),
        path.display()
    );

    Ok(catalog)
}
