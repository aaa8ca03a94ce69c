//! In-memory movement grid.
//!
//! [`MovementGrid`] is a complete [`MovementMap`]: terrain per cell,
//! roofs, weather, edifices, occupancy costs and the live agent
//! registry. Hosts with their own map types implement [`MovementMap`]
//! directly; the grid serves tools, tests and benchmarks.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::error::{MovementError, Result};
use crate::ids::{AgentId, TerrainId};
use crate::map::MovementMap;
use crate::terrain::{Terrain, TerrainRegistry};

/// Integer grid coordinate. `z` is the second horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    /// Column.
    pub x: i32,
    /// Row.
    pub z: i32,
}

impl GridPos {
    /// Create a new grid position.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Whether a move from `self` to `to` shares a grid axis.
    #[must_use]
    #[inline]
    pub const fn is_cardinal_to(self, to: Self) -> bool {
        self.x == to.x || self.z == to.z
    }
}

/// Weather as seen by movement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherState {
    /// Movement-speed multiplier for unroofed cells; below 1 slows agents.
    #[serde(default = "default_move_speed_multiplier")]
    pub move_speed_multiplier: f32,
}

fn default_move_speed_multiplier() -> f32 {
    1.0
}

impl Default for WeatherState {
    fn default() -> Self {
        Self {
            move_speed_multiplier: default_move_speed_multiplier(),
        }
    }
}

/// A fixed structure occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edifice {
    /// Ticks added to any move into the occupied cell.
    pub path_cost: u32,
}

/// Grid-backed map for movement cost queries.
#[derive(Debug, Clone)]
pub struct MovementGrid {
    /// Grid width in cells.
    width: u32,
    /// Grid height in cells.
    height: u32,
    /// Terrain per cell, row-major.
    terrain: Vec<TerrainId>,
    /// Roof flag per cell, row-major.
    roofed: Vec<bool>,
    /// Extra path cost per cell, row-major.
    occupancy: Vec<u32>,
    edifices: HashMap<GridPos, Edifice>,
    weather: WeatherState,
    terrains: TerrainRegistry,
    agents: HashMap<AgentId, Agent>,
}

impl MovementGrid {
    /// Create a grid with every cell set to `fill`, unroofed, empty.
    pub fn new(
        width: u32,
        height: u32,
        terrains: TerrainRegistry,
        fill: TerrainId,
    ) -> Result<Self> {
        let fits = |n: u32| n > 0 && i32::try_from(n).is_ok();
        if !fits(width) || !fits(height) {
            return Err(MovementError::InvalidGrid { width, height });
        }
        if terrains.get(fill).is_none() {
            return Err(MovementError::UnknownTerrain(format!("id {}", fill.as_u16())));
        }

        let cell_count = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            terrain: vec![fill; cell_count],
            roofed: vec![false; cell_count],
            occupancy: vec![0; cell_count],
            edifices: HashMap::new(),
            weather: WeatherState::default(),
            terrains,
            agents: HashMap::new(),
        })
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Terrain definitions used by this grid.
    #[must_use]
    pub fn terrains(&self) -> &TerrainRegistry {
        &self.terrains
    }

    /// Check if coordinates are within grid bounds.
    #[must_use]
    pub fn in_bounds(&self, cell: GridPos) -> bool {
        cell.x >= 0 && cell.z >= 0 && (cell.x as u32) < self.width && (cell.z as u32) < self.height
    }

    #[inline]
    fn index(&self, cell: GridPos) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| (cell.z as usize) * (self.width as usize) + (cell.x as usize))
    }

    /// Set the terrain at `cell`.
    /// Returns `false` if out of bounds or the terrain is unknown.
    pub fn set_terrain(&mut self, cell: GridPos, terrain: TerrainId) -> bool {
        if self.terrains.get(terrain).is_none() {
            return false;
        }
        match self.index(cell) {
            Some(index) => {
                self.terrain[index] = terrain;
                true
            }
            None => false,
        }
    }

    /// Roof or unroof `cell`. Returns `false` if out of bounds.
    pub fn set_roofed(&mut self, cell: GridPos, roofed: bool) -> bool {
        match self.index(cell) {
            Some(index) => {
                self.roofed[index] = roofed;
                true
            }
            None => false,
        }
    }

    /// Set the extra path cost at `cell`. Returns `false` if out of bounds.
    pub fn set_occupancy_cost(&mut self, cell: GridPos, cost: u32) -> bool {
        match self.index(cell) {
            Some(index) => {
                self.occupancy[index] = cost;
                true
            }
            None => false,
        }
    }

    /// Place an edifice at `cell`, replacing any previous one.
    /// Returns `false` if out of bounds.
    pub fn place_edifice(&mut self, cell: GridPos, edifice: Edifice) -> bool {
        if !self.in_bounds(cell) {
            return false;
        }
        self.edifices.insert(cell, edifice);
        true
    }

    /// Remove the edifice at `cell`.
    pub fn remove_edifice(&mut self, cell: GridPos) -> Option<Edifice> {
        self.edifices.remove(&cell)
    }

    /// Current weather.
    #[must_use]
    pub const fn weather(&self) -> WeatherState {
        self.weather
    }

    /// Replace the current weather.
    pub fn set_weather(&mut self, weather: WeatherState) {
        self.weather = weather;
    }

    /// Register an agent, replacing any agent with the same id.
    ///
    /// Rejects jobs that name the agent as its own leader.
    pub fn spawn_agent(&mut self, agent: Agent) -> Result<()> {
        if agent.job.and_then(|job| job.leader) == Some(agent.id) {
            return Err(MovementError::SelfLeader(agent.id));
        }
        tracing::trace!(
            agent = agent.id.as_u32(),
            x = agent.position.x,
            z = agent.position.z,
            "Agent spawned"
        );
        self.agents.insert(agent.id, agent);
        Ok(())
    }

    /// Remove an agent. Followers fall back to their own cost.
    pub fn despawn_agent(&mut self, id: AgentId) -> Option<Agent> {
        self.agents.remove(&id)
    }

    /// Mutable access to a live agent.
    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(&id)
    }
}

impl MovementMap for MovementGrid {
    #[inline]
    fn terrain_at(&self, cell: GridPos) -> Option<&Terrain> {
        self.index(cell).and_then(|index| self.terrains.get(self.terrain[index]))
    }

    fn is_roofed(&self, cell: GridPos) -> bool {
        self.index(cell).is_some_and(|index| self.roofed[index])
    }

    fn weather_move_speed_multiplier(&self) -> f32 {
        self.weather.move_speed_multiplier
    }

    fn occupancy_cost_at(&self, _agent: &Agent, cell: GridPos) -> u32 {
        self.index(cell).map_or(0, |index| self.occupancy[index])
    }

    fn edifice_path_cost(&self, _agent: &Agent, cell: GridPos) -> Option<u32> {
        self.edifices.get(&cell).map(|edifice| edifice.path_cost)
    }

    fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::JobDescriptor;
    use crate::ids::AgentKindId;

    fn registry() -> (TerrainRegistry, TerrainId, TerrainId) {
        let mut terrains = TerrainRegistry::new();
        let soil = terrains
            .insert(Terrain::new(TerrainId::new(0), "Soil", 2))
            .unwrap();
        let mud = terrains
            .insert(Terrain::new(TerrainId::new(0), "Mud", 14))
            .unwrap();
        (terrains, soil, mud)
    }

    fn grid() -> MovementGrid {
        let (terrains, soil, _) = registry();
        MovementGrid::new(5, 4, terrains, soil).unwrap()
    }

    #[test]
    fn test_grid_creation() {
        let grid = grid();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.terrain_at(GridPos::new(4, 3)).unwrap().name(), "Soil");
    }

    #[test]
    fn test_rejects_empty_dimensions() {
        let (terrains, soil, _) = registry();
        assert!(matches!(
            MovementGrid::new(0, 4, terrains, soil),
            Err(MovementError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_fill() {
        let (terrains, _, _) = registry();
        assert!(MovementGrid::new(2, 2, terrains, TerrainId::new(9)).is_err());
    }

    #[test]
    fn test_out_of_bounds_queries() {
        let grid = grid();
        assert!(grid.terrain_at(GridPos::new(-1, 0)).is_none());
        assert!(grid.terrain_at(GridPos::new(5, 0)).is_none());
        assert!(!grid.is_roofed(GridPos::new(0, 9)));
    }

    #[test]
    fn test_set_and_get_cells() {
        let (terrains, soil, mud) = registry();
        let mut grid = MovementGrid::new(3, 3, terrains, soil).unwrap();
        let cell = GridPos::new(1, 2);

        assert!(grid.set_terrain(cell, mud));
        assert!(grid.set_roofed(cell, true));
        assert!(grid.set_occupancy_cost(cell, 7));
        assert!(grid.place_edifice(cell, Edifice { path_cost: 30 }));
        assert!(!grid.set_terrain(GridPos::new(3, 0), mud));

        let agent = Agent::new(AgentId::new(1), AgentKindId::new(0), GridPos::new(0, 0));
        assert_eq!(grid.terrain_at(cell).unwrap().name(), "Mud");
        assert!(grid.is_roofed(cell));
        assert_eq!(grid.occupancy_cost_at(&agent, cell), 7);
        assert_eq!(grid.edifice_path_cost(&agent, cell), Some(30));

        grid.remove_edifice(cell);
        assert_eq!(grid.edifice_path_cost(&agent, cell), None);
    }

    #[test]
    fn test_spawn_rejects_self_leader() {
        let mut grid = grid();
        let id = AgentId::new(3);
        let agent = Agent::new(id, AgentKindId::new(0), GridPos::new(0, 0))
            .with_job(JobDescriptor::following(id));
        assert!(matches!(grid.spawn_agent(agent), Err(MovementError::SelfLeader(_))));
        assert!(grid.agent(id).is_none());
    }

    #[test]
    fn test_despawn_removes_agent() {
        let mut grid = grid();
        let id = AgentId::new(3);
        grid.spawn_agent(Agent::new(id, AgentKindId::new(0), GridPos::new(0, 0)))
            .unwrap();
        assert!(grid.agent(id).is_some());
        assert!(grid.despawn_agent(id).is_some());
        assert!(grid.agent(id).is_none());
    }

    #[test]
    fn test_weather_from_ron() {
        let clear: WeatherState = ron::from_str("WeatherState()").unwrap();
        assert_eq!(clear, WeatherState::default());
        let rain: WeatherState = ron::from_str("WeatherState(move_speed_multiplier: 0.8)").unwrap();
        assert!((rain.move_speed_multiplier - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_cardinal_detection() {
        let from = GridPos::new(2, 2);
        assert!(from.is_cardinal_to(GridPos::new(2, 3)));
        assert!(from.is_cardinal_to(GridPos::new(1, 2)));
        assert!(!from.is_cardinal_to(GridPos::new(3, 3)));
    }
}
