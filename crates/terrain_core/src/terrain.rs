//! Terrain definitions as the cost model reads them.
//!
//! A [`Terrain`] carries tags for restriction checks, a base path cost,
//! per-cost-stat movement costs and the ordered list of
//! `(speed stat, cost stat)` pairs considered during stat selection.

use std::collections::HashMap;

use crate::error::{MovementError, Result};
use crate::ids::TerrainId;
use crate::stats::StatId;

/// One `(speed stat, cost stat)` pairing a terrain supports.
///
/// Either side may be unset; an unset speed stat reads as
/// [`StatId::MOVE_SPEED`] and an unset cost stat as the terrain's base
/// path cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatPair {
    /// Agent stat providing the speed.
    pub speed: Option<StatId>,
    /// Terrain cost stat dividing that speed.
    pub cost: Option<StatId>,
}

impl StatPair {
    /// The pair returned when a terrain supports no pairs at all.
    pub const UNSET: Self = Self {
        speed: None,
        cost: None,
    };

    /// Create a fully specified pair.
    #[must_use]
    pub const fn new(speed: StatId, cost: StatId) -> Self {
        Self {
            speed: Some(speed),
            cost: Some(cost),
        }
    }

    /// Speed stat with the canonical default substituted.
    #[must_use]
    #[inline]
    pub fn speed_or_default(self) -> StatId {
        self.speed.unwrap_or(StatId::MOVE_SPEED)
    }
}

/// A terrain type.
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    id: TerrainId,
    name: String,
    tags: Vec<String>,
    path_cost: u32,
    movement_costs: Vec<(StatId, u32)>,
    stat_pairs: Vec<StatPair>,
}

impl Terrain {
    /// Create a terrain with no tags, no cost stats and no stat pairs.
    #[must_use]
    pub fn new(id: TerrainId, name: impl Into<String>, path_cost: u32) -> Self {
        Self {
            id,
            name: name.into(),
            tags: Vec::new(),
            path_cost,
            movement_costs: Vec::new(),
            stat_pairs: Vec::new(),
        }
    }

    /// Builder-style tag addition.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Builder-style movement cost for a cost stat.
    #[must_use]
    pub fn with_movement_cost(mut self, stat: StatId, cost: u32) -> Self {
        match self.movement_costs.iter_mut().find(|(id, _)| *id == stat) {
            Some(entry) => entry.1 = cost,
            None => self.movement_costs.push((stat, cost)),
        }
        self
    }

    /// Builder-style stat pair, appended in enumeration order.
    #[must_use]
    pub fn with_stat_pair(mut self, pair: StatPair) -> Self {
        self.stat_pairs.push(pair);
        self
    }

    /// Terrain identifier.
    #[must_use]
    pub const fn id(&self) -> TerrainId {
        self.id
    }

    /// Terrain name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tags carried by this terrain.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Check if this terrain has the specified tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Base path cost used when no cost stat applies.
    #[must_use]
    pub const fn path_cost(&self) -> u32 {
        self.path_cost
    }

    /// Movement cost for `stat`, falling back to the base path cost for
    /// an unset or unmapped stat.
    #[must_use]
    #[inline]
    pub fn movement_cost(&self, stat: Option<StatId>) -> u32 {
        stat.and_then(|stat| {
            self.movement_costs
                .iter()
                .find(|(id, _)| *id == stat)
                .map(|&(_, cost)| cost)
        })
        .unwrap_or(self.path_cost)
    }

    /// Supported stat pairs in enumeration order.
    #[must_use]
    pub fn stat_pairs(&self) -> &[StatPair] {
        &self.stat_pairs
    }
}

/// All terrains known to a map, indexed by [`TerrainId`].
#[derive(Debug, Clone, Default)]
pub struct TerrainRegistry {
    terrains: Vec<Terrain>,
    by_name: HashMap<String, TerrainId>,
}

impl TerrainRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id [`TerrainRegistry::insert`] will assign.
    pub fn next_id(&self) -> Result<TerrainId> {
        u16::try_from(self.terrains.len())
            .map(TerrainId::new)
            .map_err(|_| MovementError::RegistryFull("terrain"))
    }

    /// Add a terrain, assigning it the next free id. Names must be unique.
    pub fn insert(&mut self, mut terrain: Terrain) -> Result<TerrainId> {
        if self.by_name.contains_key(terrain.name()) {
            return Err(MovementError::DuplicateId {
                kind: "terrain",
                id: terrain.name().to_string(),
            });
        }
        let id = self.next_id()?;
        terrain.id = id;
        self.by_name.insert(terrain.name().to_string(), id);
        self.terrains.push(terrain);
        Ok(id)
    }

    /// Terrain by id.
    #[must_use]
    #[inline]
    pub fn get(&self, id: TerrainId) -> Option<&Terrain> {
        self.terrains.get(id.index())
    }

    /// Terrain id by name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<TerrainId> {
        self.by_name.get(name).copied()
    }

    /// Terrain by name.
    pub fn require(&self, name: &str) -> Result<&Terrain> {
        self.id_of(name)
            .and_then(|id| self.get(id))
            .ok_or_else(|| MovementError::UnknownTerrain(name.to_string()))
    }

    /// All terrains in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Terrain> {
        self.terrains.iter()
    }

    /// Number of terrains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terrains.len()
    }

    /// True when no terrain is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terrains.is_empty()
    }
}
