//! Movement stat selection.
//!
//! A terrain may offer several ways across it (walking, swimming,
//! climbing). Each way is a `(speed stat, cost stat)` pair; the agent
//! uses the pair giving it the highest effective speed, where
//! `speed = agent stat / terrain cost`.

use crate::agent::Agent;
use crate::stats::StatId;
use crate::terrain::{StatPair, Terrain};

/// Effective speed of `agent` on `terrain` under `pair`.
#[inline]
fn pair_speed(agent: &Agent, terrain: &Terrain, pair: StatPair) -> f32 {
    agent.stat_value(pair.speed_or_default()) / terrain.movement_cost(pair.cost) as f32
}

/// Best `(speed stat, cost stat)` pair for `agent` on `terrain`.
///
/// Pairs are visited in terrain order. A later pair replaces the running
/// best when its speed is greater than OR EQUAL to it, so exact ties go
/// to the later pair. Agent behavior depends on this tie-break.
///
/// The running best speed is only computed once a second pair shows up,
/// which keeps the common single-pair terrain free of divisions.
///
/// Returns [`StatPair::UNSET`] for a terrain without pairs; callers fall
/// back to the terrain's default stats.
#[must_use]
pub fn best_movement_stats(agent: &Agent, terrain: &Terrain) -> StatPair {
    let mut pairs = terrain.stat_pairs().iter().copied();
    let Some(mut best) = pairs.next() else {
        return StatPair::UNSET;
    };

    let mut best_speed: Option<f32> = None;
    for candidate in pairs {
        let current = *best_speed.get_or_insert_with(|| pair_speed(agent, terrain, best));
        let speed = pair_speed(agent, terrain, candidate);
        if speed >= current {
            best = candidate;
            best_speed = Some(speed);
        }
    }
    best
}

/// Speed stat `agent` uses on `terrain`, defaulting to `MoveSpeed`.
#[must_use]
#[inline]
pub fn terrain_move_stat(agent: &Agent, terrain: &Terrain) -> StatId {
    best_movement_stats(agent, terrain).speed_or_default()
}

/// Terrain cost under the cost stat `agent` uses on `terrain`.
#[must_use]
#[inline]
pub fn terrain_move_cost(agent: &Agent, terrain: &Terrain) -> u32 {
    terrain.movement_cost(best_movement_stats(agent, terrain).cost)
}

/// Raw speed value `agent` moves with on `terrain`.
#[must_use]
#[inline]
pub fn terrain_speed(agent: &Agent, terrain: &Terrain) -> f32 {
    agent.stat_value(terrain_move_stat(agent, terrain))
}
