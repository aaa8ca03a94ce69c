//! Numeric identifiers for agents, agent kinds and terrains.
//!
//! All identifiers are small `Copy` integers assigned at load time so
//! that the cost path never hashes or compares strings.

use serde::{Deserialize, Serialize};

/// Identifier of a live agent in the simulation.
///
/// # Example
///
/// ```
/// use terrain_core::ids::AgentId;
///
/// let id = AgentId::new(7);
/// assert_eq!(id.as_u32(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(u32);

impl AgentId {
    /// Create a new agent ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// Identifier of an agent kind (the key restriction rules hang off).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct AgentKindId(u16);

impl AgentKindId {
    /// Create a new agent kind ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Index into kind-ordered tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identifier of a terrain type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct TerrainId(u16);

impl TerrainId {
    /// Create a new terrain ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Index into terrain-ordered tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}
