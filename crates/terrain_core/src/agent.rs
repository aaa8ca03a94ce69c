//! Agent state read by the cost model.
//!
//! The simulation owns agents; the cost model only reads a snapshot of
//! position, situational flags, the current job and stat values.

use serde::{Deserialize, Serialize};

use crate::grid::GridPos;
use crate::ids::{AgentId, AgentKindId};
use crate::stats::{StatBlock, StatId};

/// How aggressively an agent moves while doing its current job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LocomotionUrgency {
    /// Slow, leisurely movement (3x cost, at least 60 ticks).
    Amble,
    /// Normal walking pace (2x cost, at least 50 ticks).
    Walk,
    /// Cost unchanged.
    #[default]
    Jog,
    /// Fastest pace (0.75x cost).
    Sprint,
}

/// The part of an agent's current job the cost model cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JobDescriptor {
    /// Urgency applied when no leader is being followed.
    pub urgency: LocomotionUrgency,
    /// Agent whose cost this agent must never undercut.
    ///
    /// A weak reference: resolved through the live agent registry and
    /// ignored if the leader is gone or names this agent.
    pub leader: Option<AgentId>,
}

impl JobDescriptor {
    /// A job moving at `urgency` with no leader.
    #[must_use]
    pub const fn new(urgency: LocomotionUrgency) -> Self {
        Self {
            urgency,
            leader: None,
        }
    }

    /// A job synchronizing locomotion with `leader`.
    #[must_use]
    pub const fn following(leader: AgentId) -> Self {
        Self {
            urgency: LocomotionUrgency::Jog,
            leader: Some(leader),
        }
    }
}

/// Broad category of something an agent is carrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThingCategory {
    /// Another agent (a carried body slows the carrier down).
    Agent,
    /// Any other item.
    Item,
}

/// A moving entity as seen by the cost model.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    /// Unique agent id.
    pub id: AgentId,
    /// Kind used to look up restriction rules.
    pub kind: AgentKindId,
    /// Current cell.
    pub position: GridPos,
    /// Whether the agent is present on the map.
    pub spawned: bool,
    /// Whether the agent is in restraints.
    pub restrained: bool,
    /// Category of the carried thing, if any.
    pub carried: Option<ThingCategory>,
    /// Current job, if any.
    pub job: Option<JobDescriptor>,
    /// Movement stat values.
    pub stats: StatBlock,
}

impl Agent {
    /// A spawned, unburdened agent with no job and no stats.
    #[must_use]
    pub fn new(id: AgentId, kind: AgentKindId, position: GridPos) -> Self {
        Self {
            id,
            kind,
            position,
            spawned: true,
            restrained: false,
            carried: None,
            job: None,
            stats: StatBlock::new(),
        }
    }

    /// Builder-style stat value.
    #[must_use]
    pub fn with_stat(mut self, stat: StatId, value: f32) -> Self {
        self.stats.set(stat, value);
        self
    }

    /// Builder-style job.
    #[must_use]
    pub fn with_job(mut self, job: JobDescriptor) -> Self {
        self.job = Some(job);
        self
    }

    /// Value of a stat for this agent.
    #[must_use]
    #[inline]
    pub fn stat_value(&self, stat: StatId) -> f32 {
        self.stats.get(stat)
    }

    /// True when carrying another agent.
    #[must_use]
    #[inline]
    pub fn is_carrying_agent(&self) -> bool {
        self.carried == Some(ThingCategory::Agent)
    }
}
