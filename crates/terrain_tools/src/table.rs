//! Cost tables: every agent kind on every terrain.

use std::fmt::Write as _;
use std::path::Path;

use terrain_core::catalog::{AgentKind, MovementCatalog};
use terrain_core::prelude::*;

use crate::error::ToolResult;
use crate::loader::load_movement_catalog;

/// Costs for one agent kind on one terrain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostRow {
    /// Agent kind name.
    pub kind: String,
    /// Terrain name.
    pub terrain: String,
    /// Whether the kind's restrictions allow the terrain.
    pub reachable: bool,
    /// Speed stat the kind uses there.
    pub stat: String,
    /// Cardinal crossing ticks.
    pub cardinal: u32,
    /// Diagonal crossing ticks.
    pub diagonal: u32,
    /// Cardinal entry cost including the terrain cost.
    pub entry: u32,
}

/// One row per kind and terrain, in declaration order.
///
/// Samples use clear weather and the kind's sample stats.
pub fn cost_table(catalog: &MovementCatalog) -> ToolResult<Vec<CostRow>> {
    let model = catalog.movement_model();
    let mut rows = Vec::with_capacity(catalog.kinds.len() * catalog.terrains.len());

    for kind in catalog.kinds.iter() {
        for terrain in catalog.terrains.iter() {
            rows.push(cost_row(catalog, &model, kind, terrain)?);
        }
    }
    Ok(rows)
}

/// Load, resolve and tabulate a movement data file.
pub fn cost_table_for_file(path: &Path) -> ToolResult<Vec<CostRow>> {
    cost_table(&load_movement_catalog(path)?)
}

fn cost_row(
    catalog: &MovementCatalog,
    model: &TerrainAwareMovement,
    kind: &AgentKind,
    terrain: &Terrain,
) -> ToolResult<CostRow> {
    let grid = MovementGrid::new(2, 1, catalog.terrains.clone(), terrain.id())?;
    let here = GridPos::new(0, 0);
    let next = GridPos::new(1, 0);
    let agent = kind.sample_agent(AgentId::new(1), here);
    let stat = catalog
        .stats
        .name(terrain_move_stat(&agent, terrain))
        .unwrap_or("?")
        .to_string();

    Ok(CostRow {
        kind: kind.name().to_string(),
        terrain: terrain.name().to_string(),
        reachable: model.is_cell_reachable(kind.id(), terrain),
        stat,
        cardinal: ticks_to_cross_cardinal(&agent, terrain, &grid),
        diagonal: ticks_to_cross_diagonal(&agent, terrain, &grid),
        entry: cost_to_enter_from_position(&agent, next, &grid),
    })
}

/// Render rows as a fixed-width text table.
#[must_use]
pub fn render(rows: &[CostRow]) -> String {
    let kind_width = rows.iter().map(|r| r.kind.len()).max().unwrap_or(0).max(4);
    let terrain_width = rows.iter().map(|r| r.terrain.len()).max().unwrap_or(0).max(7);
    let stat_width = rows.iter().map(|r| r.stat.len()).max().unwrap_or(0).max(4);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:kind_width$}  {:terrain_width$}  {:5}  {:stat_width$}  {:>4}  {:>4}  {:>5}",
        "kind", "terrain", "reach", "stat", "card", "diag", "entry"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:kind_width$}  {:terrain_width$}  {:5}  {:stat_width$}  {:>4}  {:>4}  {:>5}",
            row.kind,
            row.terrain,
            if row.reachable { "yes" } else { "no" },
            row.stat,
            row.cardinal,
            row.diagonal,
            row.entry
        );
    }
    out
}
