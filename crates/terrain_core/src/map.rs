//! Host capabilities the cost model reads.
//!
//! The path search host owns the map, the weather and the live agents;
//! the cost model reaches them only through [`MovementMap`].
//! [`crate::grid::MovementGrid`] is the in-memory implementation.

use crate::agent::Agent;
use crate::grid::GridPos;
use crate::ids::AgentId;
use crate::terrain::Terrain;

/// Read-only view of the map an agent is pathing across.
pub trait MovementMap {
    /// Terrain at `cell`, or `None` outside the map.
    fn terrain_at(&self, cell: GridPos) -> Option<&Terrain>;

    /// Whether `cell` is under a roof (sheltered from weather).
    fn is_roofed(&self, cell: GridPos) -> bool;

    /// Current weather movement-speed multiplier for unroofed cells.
    fn weather_move_speed_multiplier(&self) -> f32;

    /// Extra path-grid cost at `cell` on top of terrain cost (snow,
    /// filth, items lying around). Zero when nothing applies.
    fn occupancy_cost_at(&self, agent: &Agent, cell: GridPos) -> u32;

    /// Path cost of the edifice occupying `cell` for `agent`, if any.
    fn edifice_path_cost(&self, agent: &Agent, cell: GridPos) -> Option<u32>;

    /// Live agent lookup, used to resolve formation leaders.
    fn agent(&self, id: AgentId) -> Option<&Agent>;
}
