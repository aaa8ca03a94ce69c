//! Terrain data structures for data-driven terrain definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{MovementError, Result};
use crate::ids::TerrainId;
use crate::stats::StatRegistry;
use crate::terrain::{StatPair, Terrain};

/// One `(speed stat, cost stat)` pairing by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatPairData {
    /// Speed stat name; `None` means `MoveSpeed`.
    #[serde(default)]
    pub speed: Option<String>,
    /// Cost stat name; `None` means the terrain's base path cost.
    #[serde(default)]
    pub cost: Option<String>,
}

/// Data-driven terrain definition.
///
/// # Example RON
///
/// ```ron
/// TerrainData(
///     id: "Marsh",
///     path_cost: 14,
///     tags: ["Water", "Soft"],
///     movement_costs: {"SwimCost": 4},
///     stat_pairs: [
///         StatPairData(speed: Some("MoveSpeed"), cost: None),
///         StatPairData(speed: Some("SwimSpeed"), cost: Some("SwimCost")),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainData {
    /// Unique string identifier for this terrain.
    pub id: String,

    /// Base path cost, used when no cost stat applies.
    #[serde(default)]
    pub path_cost: u32,

    /// Tags checked by restriction rules (e.g., "Water", "Deep").
    #[serde(default)]
    pub tags: Vec<String>,

    /// Cost per cost stat.
    #[serde(default)]
    pub movement_costs: BTreeMap<String, u32>,

    /// Supported stat pairs, in selection order.
    #[serde(default)]
    pub stat_pairs: Vec<StatPairData>,
}

impl TerrainData {
    /// Check if this terrain has the specified tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Resolve names against `stats` into a [`Terrain`].
    pub fn resolve(&self, id: TerrainId, stats: &StatRegistry) -> Result<Terrain> {
        let owner = format!("terrain '{}'", self.id);
        let mut terrain = Terrain::new(id, self.id.clone(), self.path_cost);

        for tag in &self.tags {
            terrain = terrain.with_tag(tag.clone());
        }

        for (stat, &cost) in &self.movement_costs {
            if cost == 0 {
                return Err(MovementError::ZeroMovementCost {
                    terrain: self.id.clone(),
                    stat: stat.clone(),
                });
            }
            terrain = terrain.with_movement_cost(stats.require(stat, &owner)?, cost);
        }

        for pair in &self.stat_pairs {
            let speed = pair
                .speed
                .as_deref()
                .map(|name| stats.require(name, &owner))
                .transpose()?;
            let cost = pair
                .cost
                .as_deref()
                .map(|name| stats.require(name, &owner))
                .transpose()?;
            let mapped = pair
                .cost
                .as_deref()
                .and_then(|name| self.movement_costs.get(name).copied());
            if let (Some(name), None) = (pair.cost.as_deref(), mapped) {
                tracing::warn!(
                    terrain = %self.id,
                    stat = name,
                    "Cost stat has no movement cost; base path cost applies"
                );
            }
            // Pair speeds divide by this cost during selection.
            if mapped.unwrap_or(self.path_cost) == 0 {
                return Err(MovementError::ZeroMovementCost {
                    terrain: self.id.clone(),
                    stat: pair.cost.clone().unwrap_or_else(|| "path_cost".to_string()),
                });
            }
            terrain = terrain.with_stat_pair(StatPair { speed, cost });
        }

        Ok(terrain)
    }
}
