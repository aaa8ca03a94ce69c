//! Agent kind data structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::restriction::TagRestriction;
use crate::stats::{StatBlock, StatRegistry};

/// Terrain tag restriction as written in data files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RestrictionData {
    /// Terrains carrying this tag are unreachable.
    #[serde(default)]
    pub stay_off_terrain_tag: Option<String>,

    /// Terrains lacking this tag are unreachable.
    #[serde(default)]
    pub stay_on_terrain_tag: Option<String>,
}

impl From<&RestrictionData> for TagRestriction {
    fn from(data: &RestrictionData) -> Self {
        Self {
            stay_off_terrain_tag: data.stay_off_terrain_tag.clone(),
            stay_on_terrain_tag: data.stay_on_terrain_tag.clone(),
        }
    }
}

/// Data-driven agent kind definition.
///
/// # Example RON
///
/// ```ron
/// AgentKindData(
///     id: "Crocodile",
///     restrictions: [
///         RestrictionData(stay_off_terrain_tag: Some("Deep")),
///     ],
///     sample_stats: {"MoveSpeed": 3.2, "SwimSpeed": 6.0},
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentKindData {
    /// Unique string identifier for this kind.
    pub id: String,

    /// Terrain restrictions; any one may rule a terrain out.
    #[serde(default)]
    pub restrictions: Vec<RestrictionData>,

    /// Representative stat values, used by tooling and fixtures.
    #[serde(default)]
    pub sample_stats: BTreeMap<String, f32>,
}

impl AgentKindData {
    /// Resolve `sample_stats` names against `stats`.
    pub fn resolve_sample_stats(&self, stats: &StatRegistry) -> Result<StatBlock> {
        let owner = format!("agent kind '{}'", self.id);
        let mut block = StatBlock::new();
        for (name, &value) in &self.sample_stats {
            block.set(stats.require(name, &owner)?, value);
        }
        Ok(block)
    }
}
