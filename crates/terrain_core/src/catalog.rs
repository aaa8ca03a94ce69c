//! Resolved movement configuration.
//!
//! [`MovementCatalog`] is what [`crate::data::MovementData::resolve`]
//! produces: every name interned, every reference checked.

use std::collections::HashMap;

use crate::agent::Agent;
use crate::error::{MovementError, Result};
use crate::grid::GridPos;
use crate::ids::{AgentId, AgentKindId};
use crate::model::TerrainAwareMovement;
use crate::restriction::RestrictionRegistry;
use crate::stats::{StatBlock, StatRegistry};
use crate::terrain::TerrainRegistry;

/// A resolved agent kind.
#[derive(Debug, Clone)]
pub struct AgentKind {
    id: AgentKindId,
    name: String,
    sample_stats: StatBlock,
}

impl AgentKind {
    /// Interned id.
    #[must_use]
    pub const fn id(&self) -> AgentKindId {
        self.id
    }

    /// Name from the data file.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Representative stat values.
    #[must_use]
    pub fn sample_stats(&self) -> &StatBlock {
        &self.sample_stats
    }

    /// A spawned agent of this kind carrying the sample stats.
    #[must_use]
    pub fn sample_agent(&self, id: AgentId, position: GridPos) -> Agent {
        let mut agent = Agent::new(id, self.id, position);
        agent.stats = self.sample_stats.clone();
        agent
    }
}

/// Agent kinds by name and id.
///
/// Id 0 is reserved for agents whose kind carries no data.
#[derive(Debug, Clone, Default)]
pub struct AgentKindRegistry {
    kinds: Vec<AgentKind>,
    by_name: HashMap<String, AgentKindId>,
}

impl AgentKindRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kind. Ids start at 1.
    pub fn insert(&mut self, name: &str, sample_stats: StatBlock) -> Result<AgentKindId> {
        if self.by_name.contains_key(name) {
            return Err(MovementError::DuplicateId {
                kind: "agent kind",
                id: name.to_string(),
            });
        }
        let raw = u16::try_from(self.kinds.len() + 1)
            .map_err(|_| MovementError::RegistryFull("agent kind"))?;
        let id = AgentKindId::new(raw);
        self.kinds.push(AgentKind {
            id,
            name: name.to_string(),
            sample_stats,
        });
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Look up a kind by id.
    #[must_use]
    pub fn get(&self, id: AgentKindId) -> Option<&AgentKind> {
        id.index()
            .checked_sub(1)
            .and_then(|index| self.kinds.get(index))
    }

    /// Look up a kind by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&AgentKind> {
        self.by_name.get(name).and_then(|&id| self.get(id))
    }

    /// All kinds in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &AgentKind> {
        self.kinds.iter()
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether no kinds are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// Every registry the cost model needs.
#[derive(Debug, Clone)]
pub struct MovementCatalog {
    /// Interned stats.
    pub stats: StatRegistry,
    /// Terrain definitions.
    pub terrains: TerrainRegistry,
    /// Agent kinds with data.
    pub kinds: AgentKindRegistry,
    /// Restriction rules per kind.
    pub restrictions: RestrictionRegistry,
}

impl MovementCatalog {
    /// Build the path cost model from the restriction rules.
    #[must_use]
    pub fn movement_model(&self) -> TerrainAwareMovement {
        TerrainAwareMovement::new(self.restrictions.clone())
    }
}
