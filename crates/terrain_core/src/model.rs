//! Pluggable cost strategy for a path search host.
//!
//! A host search holds one [`PathCostModel`] and calls it for its
//! "can occupy" check and for every edge cost, instead of using its own
//! defaults.

use crate::agent::Agent;
use crate::entry_cost::cost_to_enter;
use crate::grid::GridPos;
use crate::ids::AgentKindId;
use crate::map::MovementMap;
use crate::restriction::RestrictionRegistry;
use crate::terrain::Terrain;

/// Occupancy predicate and edge cost consumed by a path search.
pub trait PathCostModel<M: MovementMap + ?Sized> {
    /// Whether `agent` may occupy `cell`, given the host's own verdict.
    ///
    /// Implementations may only narrow `baseline`, never widen it.
    fn can_occupy(&self, agent: &Agent, cell: GridPos, baseline: bool, map: &M) -> bool;

    /// Ticks for `agent` to step from `from` into `to`, in `[1, 450]`.
    fn cost_to_enter_cell(&self, agent: &Agent, from: GridPos, to: GridPos, map: &M) -> u32;
}

/// Terrain-aware movement: tag restrictions plus the entry cost
/// resolver.
#[derive(Debug, Clone, Default)]
pub struct TerrainAwareMovement {
    restrictions: RestrictionRegistry,
}

impl TerrainAwareMovement {
    /// Create a model over the given restriction rules.
    #[must_use]
    pub fn new(restrictions: RestrictionRegistry) -> Self {
        Self { restrictions }
    }

    /// Restriction rules in use.
    #[must_use]
    pub fn restrictions(&self) -> &RestrictionRegistry {
        &self.restrictions
    }

    /// Whether `terrain` is legal for `kind`.
    #[must_use]
    #[inline]
    pub fn is_cell_reachable(&self, kind: AgentKindId, terrain: &Terrain) -> bool {
        !self.restrictions.is_unreachable(kind, terrain)
    }
}

impl<M: MovementMap + ?Sized> PathCostModel<M> for TerrainAwareMovement {
    fn can_occupy(&self, agent: &Agent, cell: GridPos, baseline: bool, map: &M) -> bool {
        if !baseline {
            return false;
        }
        // Off-map cells are the host's call.
        map.terrain_at(cell)
            .map_or(true, |terrain| self.is_cell_reachable(agent.kind, terrain))
    }

    fn cost_to_enter_cell(&self, agent: &Agent, from: GridPos, to: GridPos, map: &M) -> u32 {
        cost_to_enter(agent, from, to, map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MovementGrid;
    use crate::ids::{AgentId, TerrainId};
    use crate::restriction::TagRestriction;
    use crate::stats::StatId;
    use crate::terrain::TerrainRegistry;

    const FISH: AgentKindId = AgentKindId::new(1);
    const DRY: GridPos = GridPos::new(0, 0);
    const WET: GridPos = GridPos::new(1, 0);

    fn grid() -> MovementGrid {
        let mut terrains = TerrainRegistry::new();
        let soil = terrains
            .insert(Terrain::new(TerrainId::new(0), "Soil", 2))
            .unwrap();
        let water = terrains
            .insert(Terrain::new(TerrainId::new(0), "Water", 14).with_tag("Water"))
            .unwrap();
        let mut grid = MovementGrid::new(2, 1, terrains, soil).unwrap();
        grid.set_terrain(WET, water);
        grid
    }

    fn model() -> TerrainAwareMovement {
        TerrainAwareMovement::new(
            RestrictionRegistry::new().with_rule(FISH, TagRestriction::stay_on("Water")),
        )
    }

    #[test]
    fn test_can_occupy_narrows_baseline() {
        let grid = grid();
        let fish = Agent::new(AgentId::new(1), FISH, WET);
        assert!(model().can_occupy(&fish, WET, true, &grid));
        assert!(!model().can_occupy(&fish, DRY, true, &grid));
        // Never widens.
        assert!(!model().can_occupy(&fish, WET, false, &grid));
    }

    #[test]
    fn test_unrestricted_kind_follows_baseline() {
        let grid = grid();
        let walker = Agent::new(AgentId::new(2), AgentKindId::new(0), DRY);
        assert!(model().can_occupy(&walker, WET, true, &grid));
        assert!(model().can_occupy(&walker, DRY, true, &grid));
    }

    #[test]
    fn test_cost_to_enter_cell_delegates() {
        let grid = grid();
        let walker = Agent::new(AgentId::new(2), AgentKindId::new(0), DRY)
            .with_stat(StatId::MOVE_SPEED, 4.0);
        // 15 crossing + 14 water path cost
        assert_eq!(model().cost_to_enter_cell(&walker, DRY, WET, &grid), 29);
    }
}
