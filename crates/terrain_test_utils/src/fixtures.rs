//! Test fixtures and helpers.
//!
//! The stock movement data from `assets/data/movement.ron`, grids laid
//! out over its terrains, and agent builders for consistent testing.

use terrain_core::prelude::*;

/// Contents of `assets/data/movement.ron`.
pub const SAMPLE_MOVEMENT_RON: &str = include_str!("../../../assets/data/movement.ron");

/// Terrain column order used by [`striped_grid`].
pub const STRIPE_ORDER: [&str; 4] = ["Soil", "Floor", "Marsh", "DeepWater"];

/// Parse and resolve the stock movement data.
///
/// # Panics
///
/// Panics if the bundled data file is invalid.
#[must_use]
pub fn sample_catalog() -> MovementCatalog {
    MovementData::from_ron_str(SAMPLE_MOVEMENT_RON)
        .and_then(|data| data.resolve())
        .expect("bundled movement data must resolve")
}

/// Terrain id by name in `catalog`.
///
/// # Panics
///
/// Panics if the terrain is not defined.
#[must_use]
pub fn terrain_id(catalog: &MovementCatalog, name: &str) -> TerrainId {
    catalog
        .terrains
        .id_of(name)
        .unwrap_or_else(|| panic!("terrain '{name}' not in catalog"))
}

/// Agent kind id by name in `catalog`.
///
/// # Panics
///
/// Panics if the kind is not defined.
#[must_use]
pub fn kind_id(catalog: &MovementCatalog, name: &str) -> AgentKindId {
    catalog
        .kinds
        .by_name(name)
        .unwrap_or_else(|| panic!("agent kind '{name}' not in catalog"))
        .id()
}

/// Stat id by name in `catalog`.
///
/// # Panics
///
/// Panics if the stat is not defined.
#[must_use]
pub fn stat_id(catalog: &MovementCatalog, name: &str) -> StatId {
    catalog
        .stats
        .get(name)
        .unwrap_or_else(|| panic!("stat '{name}' not in catalog"))
}

/// A grid whose column `x` holds `STRIPE_ORDER[x % 4]`.
///
/// # Panics
///
/// Panics on zero dimensions.
#[must_use]
pub fn striped_grid(catalog: &MovementCatalog, width: u32, height: u32) -> MovementGrid {
    let fill = terrain_id(catalog, STRIPE_ORDER[0]);
    let mut grid = MovementGrid::new(width, height, catalog.terrains.clone(), fill)
        .expect("grid dimensions must be valid");
    for x in 0..width as i32 {
        let terrain = terrain_id(catalog, STRIPE_ORDER[x as usize % STRIPE_ORDER.len()]);
        for z in 0..height as i32 {
            grid.set_terrain(GridPos::new(x, z), terrain);
        }
    }
    grid
}

/// A grid of a single terrain.
///
/// # Panics
///
/// Panics on zero dimensions or an unknown terrain.
#[must_use]
pub fn uniform_grid(catalog: &MovementCatalog, terrain: &str, size: u32) -> MovementGrid {
    MovementGrid::new(size, size, catalog.terrains.clone(), terrain_id(catalog, terrain))
        .expect("grid dimensions must be valid")
}

/// A sample agent of the named kind.
///
/// # Panics
///
/// Panics if the kind is not defined.
#[must_use]
pub fn sample_agent(catalog: &MovementCatalog, kind: &str, id: u32, position: GridPos) -> Agent {
    catalog
        .kinds
        .by_name(kind)
        .unwrap_or_else(|| panic!("agent kind '{kind}' not in catalog"))
        .sample_agent(AgentId::new(id), position)
}

/// A kindless agent moving at `speed` under `MoveSpeed`.
#[must_use]
pub fn walker(id: u32, speed: f32, position: GridPos) -> Agent {
    Agent::new(AgentId::new(id), AgentKindId::default(), position)
        .with_stat(StatId::MOVE_SPEED, speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_loads() {
        let catalog = sample_catalog();
        assert_eq!(catalog.terrains.len(), 4);
        assert_eq!(catalog.kinds.len(), 3);
    }

    #[test]
    fn test_striped_grid_layout() {
        let catalog = sample_catalog();
        let grid = striped_grid(&catalog, 8, 2);
        assert_eq!(grid.terrain_at(GridPos::new(2, 1)).unwrap().name(), "Marsh");
        assert_eq!(grid.terrain_at(GridPos::new(7, 0)).unwrap().name(), "DeepWater");
    }
}
