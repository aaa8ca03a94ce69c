//! Top-level movement data file.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::agent_kind_data::AgentKindData;
use super::terrain_data::TerrainData;
use crate::catalog::{AgentKindRegistry, MovementCatalog};
use crate::error::{MovementError, Result};
use crate::restriction::{RestrictionRegistry, TagRestriction};
use crate::stats::{StatRegistry, MOVE_SPEED_NAME};
use crate::terrain::TerrainRegistry;

/// Complete movement data definition.
///
/// Declares every non-default stat, every terrain and every agent kind
/// with restrictions. Loaded from a RON file at startup.
///
/// # Example RON
///
/// ```ron
/// MovementData(
///     stats: ["SwimSpeed", "SwimCost"],
///     terrains: [...],
///     agent_kinds: [...],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MovementData {
    /// Stat names beyond the implicit `MoveSpeed`.
    #[serde(default)]
    pub stats: Vec<String>,

    /// All terrain types.
    #[serde(default)]
    pub terrains: Vec<TerrainData>,

    /// All agent kinds that carry restrictions or sample stats.
    #[serde(default)]
    pub agent_kinds: Vec<AgentKindData>,
}

impl MovementData {
    /// Parse movement data from RON text.
    pub fn from_ron_str(source: &str) -> Result<Self> {
        Ok(ron::from_str(source)?)
    }

    /// Validate every reference and intern all names.
    ///
    /// Stats are registered first so terrains and kinds may reference
    /// them in any order. Declaring `MoveSpeed` explicitly is allowed.
    pub fn resolve(&self) -> Result<MovementCatalog> {
        let mut stats = StatRegistry::new();
        for name in &self.stats {
            if name != MOVE_SPEED_NAME && stats.get(name).is_some() {
                return Err(MovementError::DuplicateId {
                    kind: "stat",
                    id: name.clone(),
                });
            }
            stats.register(name)?;
        }

        let mut terrains = TerrainRegistry::new();
        for data in &self.terrains {
            let terrain = data.resolve(terrains.next_id()?, &stats)?;
            terrains.insert(terrain)?;
        }

        let mut kinds = AgentKindRegistry::new();
        let mut restrictions = RestrictionRegistry::new();
        for data in &self.agent_kinds {
            let kind = kinds.insert(&data.id, data.resolve_sample_stats(&stats)?)?;
            for rule in &data.restrictions {
                restrictions.attach(kind, Arc::new(TagRestriction::from(rule)));
            }
        }

        tracing::debug!(
            stats = stats.len(),
            terrains = terrains.len(),
            agent_kinds = kinds.len(),
            "Movement data resolved"
        );

        Ok(MovementCatalog {
            stats,
            terrains,
            kinds,
            restrictions,
        })
    }

    /// Find a terrain definition by id.
    #[must_use]
    pub fn terrain(&self, id: &str) -> Option<&TerrainData> {
        self.terrains.iter().find(|t| t.id == id)
    }

    /// Find an agent kind definition by id.
    #[must_use]
    pub fn agent_kind(&self, id: &str) -> Option<&AgentKindData> {
        self.agent_kinds.iter().find(|k| k.id == id)
    }
}
