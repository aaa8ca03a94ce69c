//! Ticks needed to cross a single cell.
//!
//! Converts the agent's speed on a terrain into a tick cost, applying
//! restraint, burden, weather exposure and the diagonal factor. All
//! arithmetic is `f32` so results match the simulation bit for bit.

use crate::agent::Agent;
use crate::grid::GridPos;
use crate::map::MovementMap;
use crate::selector::terrain_speed;
use crate::terrain::Terrain;

/// Upper bound on any per-cell cost, in ticks. Also the cost of an
/// immobile agent.
pub const MAX_CELL_COST: u32 = 450;

/// Lower bound on any per-cell cost, in ticks.
pub const MIN_CELL_COST: u32 = 1;

/// Speed multiplier while in restraints.
pub const RESTRAINED_SPEED_FACTOR: f32 = 0.35;

/// Speed multiplier while carrying another agent.
pub const CARRYING_AGENT_SPEED_FACTOR: f32 = 0.6;

/// Speed units per tick fraction: speed / 60 cells per tick.
pub const TICKS_PER_SPEED_UNIT: f32 = 60.0;

/// Cost multiplier for diagonal moves (sqrt 2, truncated).
pub const DIAGONAL_COST_FACTOR: f32 = 1.41421;

/// Round half away from zero and clamp into `[MIN_CELL_COST, MAX_CELL_COST]`.
///
/// Infinite costs saturate to the cap; NaN collapses to the floor.
#[must_use]
#[inline]
pub fn clamp_ticks(cost: f32) -> u32 {
    let rounded = cost.round() as i64;
    rounded.clamp(i64::from(MIN_CELL_COST), i64::from(MAX_CELL_COST)) as u32
}

/// Speed of `agent` on `terrain` after restraint and burden.
///
/// Restraint is applied first, then burden, so dropping the burden
/// divides out [`CARRYING_AGENT_SPEED_FACTOR`] exactly.
#[must_use]
#[inline]
pub fn effective_speed(agent: &Agent, terrain: &Terrain) -> f32 {
    let mut speed = terrain_speed(agent, terrain);
    if agent.restrained {
        speed *= RESTRAINED_SPEED_FACTOR;
    }
    if agent.is_carrying_agent() {
        speed *= CARRYING_AGENT_SPEED_FACTOR;
    }
    speed
}

/// Ticks for `agent` to cross one cell of `terrain`.
///
/// Weather only applies when the agent is spawned and standing on an
/// unroofed cell of `map`; the roof is read at `agent.position`.
#[must_use]
pub fn ticks_to_cross<M: MovementMap + ?Sized>(
    agent: &Agent,
    terrain: &Terrain,
    diagonal: bool,
    map: &M,
) -> u32 {
    let fraction = effective_speed(agent, terrain) / TICKS_PER_SPEED_UNIT;
    if fraction == 0.0 {
        tracing::trace!(
            agent = agent.id.as_u32(),
            terrain = terrain.name(),
            "Agent immobile on terrain; cost capped"
        );
        return MAX_CELL_COST;
    }

    let mut cost = 1.0 / fraction;
    if agent.spawned && !map.is_roofed(agent.position) {
        cost /= map.weather_move_speed_multiplier();
    }
    if diagonal {
        cost *= DIAGONAL_COST_FACTOR;
    }
    clamp_ticks(cost)
}

/// [`ticks_to_cross`] for a cardinal move.
#[must_use]
pub fn ticks_to_cross_cardinal<M: MovementMap + ?Sized>(
    agent: &Agent,
    terrain: &Terrain,
    map: &M,
) -> u32 {
    ticks_to_cross(agent, terrain, false, map)
}

/// [`ticks_to_cross`] for a diagonal move.
#[must_use]
pub fn ticks_to_cross_diagonal<M: MovementMap + ?Sized>(
    agent: &Agent,
    terrain: &Terrain,
    map: &M,
) -> u32 {
    ticks_to_cross(agent, terrain, true, map)
}

/// [`ticks_to_cross`] for the terrain at `cell`; the cap if `cell` is off
/// the map.
#[must_use]
pub fn ticks_to_cross_cell<M: MovementMap + ?Sized>(
    agent: &Agent,
    cell: GridPos,
    diagonal: bool,
    map: &M,
) -> u32 {
    map.terrain_at(cell)
        .map_or(MAX_CELL_COST, |terrain| ticks_to_cross(agent, terrain, diagonal, map))
}
