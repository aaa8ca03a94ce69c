//! Stat identifiers and per-agent stat values.
//!
//! Speed stats ("how fast can this agent swim") and cost stats ("how
//! hard is this terrain to swim through") share one id space. Names are
//! interned once by [`StatRegistry`]; the cost path only sees [`StatId`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{MovementError, Result};

/// Interned stat identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StatId(u16);

impl StatId {
    /// Canonical baseline speed stat, used whenever a pair leaves its
    /// speed stat unset.
    pub const MOVE_SPEED: Self = Self(0);

    /// Create a stat ID from its raw value.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

/// Name of [`StatId::MOVE_SPEED`].
pub const MOVE_SPEED_NAME: &str = "MoveSpeed";

/// Maps stat names to [`StatId`]s.
///
/// `MoveSpeed` is always registered first and therefore always has id 0.
#[derive(Debug, Clone)]
pub struct StatRegistry {
    names: Vec<String>,
    by_name: HashMap<String, StatId>,
}

impl StatRegistry {
    /// Create a registry containing only `MoveSpeed`.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            names: Vec::new(),
            by_name: HashMap::new(),
        };
        registry.names.push(MOVE_SPEED_NAME.to_string());
        registry
            .by_name
            .insert(MOVE_SPEED_NAME.to_string(), StatId::MOVE_SPEED);
        registry
    }

    /// Register a stat, returning the existing id if already known.
    pub fn register(&mut self, name: &str) -> Result<StatId> {
        if let Some(&id) = self.by_name.get(name) {
            return Ok(id);
        }
        let raw = u16::try_from(self.names.len())
            .map_err(|_| MovementError::RegistryFull("stat"))?;
        let id = StatId(raw);
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Look up a stat by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<StatId> {
        self.by_name.get(name).copied()
    }

    /// Look up a stat by name, reporting `owner` on failure.
    pub fn require(&self, name: &str, owner: &str) -> Result<StatId> {
        self.get(name).ok_or_else(|| MovementError::UnknownStat {
            stat: name.to_string(),
            owner: owner.to_string(),
        })
    }

    /// Name of a registered stat.
    #[must_use]
    pub fn name(&self, id: StatId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }

    /// Number of registered stats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: `MoveSpeed` is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for StatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Stat values carried by one agent.
///
/// Agents carry a handful of movement stats, so a linear scan beats
/// hashing on the hot path. Unset stats read as `0.0`, which makes the
/// agent immobile under that stat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatBlock {
    values: Vec<(StatId, f32)>,
}

impl StatBlock {
    /// Create an empty stat block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, stat: StatId, value: f32) -> Self {
        self.set(stat, value);
        self
    }

    /// Set a stat value, replacing any previous value.
    pub fn set(&mut self, stat: StatId, value: f32) {
        match self.values.iter_mut().find(|(id, _)| *id == stat) {
            Some(entry) => entry.1 = value,
            None => self.values.push((stat, value)),
        }
    }

    /// Value of `stat`, or `0.0` when unset.
    #[must_use]
    #[inline]
    pub fn get(&self, stat: StatId) -> f32 {
        self.values
            .iter()
            .find(|(id, _)| *id == stat)
            .map_or(0.0, |&(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_speed_is_always_registered_first() {
        let registry = StatRegistry::new();
        assert_eq!(registry.get(MOVE_SPEED_NAME), Some(StatId::MOVE_SPEED));
        assert_eq!(registry.name(StatId::MOVE_SPEED), Some(MOVE_SPEED_NAME));
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = StatRegistry::new();
        let swim = registry.register("SwimSpeed").unwrap();
        assert_eq!(registry.register("SwimSpeed").unwrap(), swim);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_require_reports_owner() {
        let registry = StatRegistry::new();
        let err = registry.require("ClimbSpeed", "terrain 'Cliff'").unwrap_err();
        assert!(err.to_string().contains("Cliff"));
    }

    #[test]
    fn test_stat_block_defaults_to_zero() {
        let block = StatBlock::new().with(StatId::MOVE_SPEED, 4.6);
        assert!((block.get(StatId::MOVE_SPEED) - 4.6).abs() < f32::EPSILON);
        assert_eq!(block.get(StatId::new(5)), 0.0);
    }

    #[test]
    fn test_stat_block_set_replaces() {
        let mut block = StatBlock::new();
        block.set(StatId::MOVE_SPEED, 1.0);
        block.set(StatId::MOVE_SPEED, 2.0);
        assert_eq!(block.get(StatId::MOVE_SPEED), 2.0);
    }
}
