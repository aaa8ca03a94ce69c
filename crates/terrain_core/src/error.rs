//! Error types for movement data resolution.
//!
//! The cost path itself never fails; these errors only surface while
//! turning movement data into registries or while building a grid.

use thiserror::Error;

use crate::ids::AgentId;

/// Result type alias using [`MovementError`].
pub type Result<T> = std::result::Result<T, MovementError>;

/// Top-level error type for movement configuration and grid setup.
#[derive(Debug, Error)]
pub enum MovementError {
    /// Movement data could not be parsed.
    #[error("Failed to parse movement data: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// A stat name was referenced but never declared.
    #[error("Unknown stat '{stat}' referenced by {owner}")]
    UnknownStat {
        /// Name of the missing stat.
        stat: String,
        /// Definition that referenced it.
        owner: String,
    },

    /// A terrain name was referenced but never declared.
    #[error("Unknown terrain: {0}")]
    UnknownTerrain(String),

    /// Two definitions share an identifier.
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId {
        /// Kind of definition ("stat", "terrain", "agent kind").
        kind: &'static str,
        /// The repeated identifier.
        id: String,
    },

    /// A terrain declared a non-positive movement cost.
    #[error("Terrain '{terrain}' has zero movement cost for '{stat}'")]
    ZeroMovementCost {
        /// Terrain name.
        terrain: String,
        /// Cost stat name.
        stat: String,
    },

    /// Too many stats, terrains or agent kinds to intern.
    #[error("Too many {0} definitions")]
    RegistryFull(&'static str),

    /// Grid dimensions are unusable.
    #[error("Invalid grid dimensions {width}x{height}")]
    InvalidGrid {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// An agent's job names the agent itself as its formation leader.
    #[error("Agent {0:?} cannot follow itself")]
    SelfLeader(AgentId),
}
