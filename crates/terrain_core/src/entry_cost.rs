//! Cost for an agent to enter a cell.
//!
//! This is the edge cost the path search asks for. It replaces the
//! search's default edge cost outright:
//!
//! 1. ticks to cross the target terrain (cardinal or diagonal),
//! 2. plus the agent-aware terrain cost, the host's occupancy cost and
//!    any edifice cost, capped at [`MAX_CELL_COST`],
//! 3. then, with an active job, either the formation leader's cost for
//!    the same cell (whichever is higher) or the urgency transform,
//! 4. clamped into `[MIN_CELL_COST, MAX_CELL_COST]`.

use crate::agent::{Agent, JobDescriptor, LocomotionUrgency};
use crate::crossing::{ticks_to_cross, MAX_CELL_COST, MIN_CELL_COST};
use crate::grid::GridPos;
use crate::ids::AgentId;
use crate::map::MovementMap;
use crate::selector::terrain_move_cost;

/// Cost multiplier while ambling.
pub const AMBLE_COST_FACTOR: u32 = 3;
/// Minimum ambling cost in ticks.
pub const AMBLE_MIN_COST: u32 = 60;
/// Cost multiplier while walking.
pub const WALK_COST_FACTOR: u32 = 2;
/// Minimum walking cost in ticks.
pub const WALK_MIN_COST: u32 = 50;
/// Sprint scales cost by this and rounds.
pub const SPRINT_COST_FACTOR: f32 = 0.75;

/// Each term of a resolved entry cost, for inspection and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryCost {
    /// Whether the move was diagonal.
    pub diagonal: bool,
    /// Ticks to cross the target terrain.
    pub crossing: u32,
    /// Terrain cost under the agent's chosen cost stat.
    pub terrain: u32,
    /// Host occupancy cost of the target cell.
    pub occupancy: u32,
    /// Edifice cost of the target cell, if occupied.
    pub edifice: Option<u32>,
    /// Leader the cost was synchronized with, and the leader's cost.
    pub leader: Option<(AgentId, u32)>,
    /// Urgency applied, when no leader was followed.
    pub urgency: Option<LocomotionUrgency>,
    /// Final cost in ticks.
    pub total: u32,
}

/// Apply the urgency transform to a pre-urgency cost.
#[must_use]
#[inline]
pub fn apply_urgency(cost: u32, urgency: LocomotionUrgency) -> u32 {
    match urgency {
        LocomotionUrgency::Amble => cost.saturating_mul(AMBLE_COST_FACTOR).max(AMBLE_MIN_COST),
        LocomotionUrgency::Walk => cost.saturating_mul(WALK_COST_FACTOR).max(WALK_MIN_COST),
        LocomotionUrgency::Jog => cost,
        LocomotionUrgency::Sprint => (cost as f32 * SPRINT_COST_FACTOR).round() as u32,
    }
}

/// The leader `agent` synchronizes with, if it is usable: not the agent
/// itself, present on the map, and spawned.
fn live_leader<'m, M: MovementMap + ?Sized>(
    agent: &Agent,
    job: JobDescriptor,
    map: &'m M,
) -> Option<&'m Agent> {
    let leader_id = job.leader.filter(|&id| id != agent.id)?;
    let leader = map.agent(leader_id).filter(|leader| leader.spawned);
    if leader.is_none() {
        tracing::trace!(
            agent = agent.id.as_u32(),
            leader = leader_id.as_u32(),
            "Leader absent; using own cost"
        );
    }
    leader
}

fn resolve<M: MovementMap + ?Sized>(
    agent: &Agent,
    from: GridPos,
    to: GridPos,
    map: &M,
    follow_leader: bool,
) -> EntryCost {
    let diagonal = !from.is_cardinal_to(to);
    let Some(terrain) = map.terrain_at(to) else {
        return EntryCost {
            diagonal,
            crossing: MAX_CELL_COST,
            total: MAX_CELL_COST,
            ..EntryCost::default()
        };
    };

    let mut breakdown = EntryCost {
        diagonal,
        crossing: ticks_to_cross(agent, terrain, diagonal, map),
        terrain: terrain_move_cost(agent, terrain),
        occupancy: map.occupancy_cost_at(agent, to),
        edifice: map.edifice_path_cost(agent, to),
        ..EntryCost::default()
    };

    let mut cost = breakdown
        .crossing
        .saturating_add(breakdown.terrain)
        .saturating_add(breakdown.occupancy)
        .saturating_add(breakdown.edifice.unwrap_or(0))
        .min(MAX_CELL_COST);

    if let Some(job) = agent.job {
        // Leaders are resolved with follow_leader = false: one level only.
        let leader = if follow_leader {
            live_leader(agent, job, map)
        } else {
            None
        };
        match leader {
            Some(leader) => {
                let leader_cost = resolve(leader, leader.position, to, map, false).total;
                breakdown.leader = Some((leader.id, leader_cost));
                cost = cost.max(leader_cost);
            }
            None => {
                breakdown.urgency = Some(job.urgency);
                cost = apply_urgency(cost, job.urgency);
            }
        }
    }

    breakdown.total = cost.clamp(MIN_CELL_COST, MAX_CELL_COST);
    breakdown
}

/// Ticks for `agent` to move from `from` into `to`.
///
/// Never fails: an off-map target costs [`MAX_CELL_COST`], an absent
/// leader falls back to the agent's own cost.
///
/// `from` only decides cardinal versus diagonal. Weather exposure is read
/// at `agent.position`, so callers costing moves out of other cells must
/// pass an agent positioned at `from` (see [`cost_to_enter_from_position`]).
#[must_use]
pub fn cost_to_enter<M: MovementMap + ?Sized>(
    agent: &Agent,
    from: GridPos,
    to: GridPos,
    map: &M,
) -> u32 {
    resolve(agent, from, to, map, true).total
}

/// [`cost_to_enter`] from the agent's current position.
#[must_use]
pub fn cost_to_enter_from_position<M: MovementMap + ?Sized>(
    agent: &Agent,
    to: GridPos,
    map: &M,
) -> u32 {
    cost_to_enter(agent, agent.position, to, map)
}

/// [`cost_to_enter`] with every term broken out.
#[must_use]
pub fn explain_cost_to_enter<M: MovementMap + ?Sized>(
    agent: &Agent,
    from: GridPos,
    to: GridPos,
    map: &M,
) -> EntryCost {
    resolve(agent, from, to, map, true)
}
