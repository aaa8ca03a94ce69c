//! Terrain tag restrictions per agent kind.
//!
//! An agent kind may carry any number of rules, each with an optional
//! "stay off" tag and an optional "stay on" tag. A terrain is
//! unreachable for the kind if ANY rule rejects it. Third-party rule
//! types plug in by implementing [`TerrainRestriction`].

use std::fmt;
use std::sync::Arc;

use crate::ids::AgentKindId;
use crate::terrain::Terrain;

/// A restriction rule attached to an agent kind.
pub trait TerrainRestriction: fmt::Debug + Send + Sync {
    /// Terrains carrying this tag are off limits.
    fn stay_off_tag(&self) -> Option<&str>;

    /// Terrains lacking this tag are off limits.
    fn stay_on_tag(&self) -> Option<&str>;

    /// Whether this rule forbids `terrain`.
    fn forbids(&self, terrain: &Terrain) -> bool {
        if self.stay_off_tag().is_some_and(|tag| terrain.has_tag(tag)) {
            return true;
        }
        self.stay_on_tag().is_some_and(|tag| !terrain.has_tag(tag))
    }
}

/// The stock tag rule loaded from movement data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagRestriction {
    /// Tag the kind must avoid.
    pub stay_off_terrain_tag: Option<String>,
    /// Tag the kind must stay on.
    pub stay_on_terrain_tag: Option<String>,
}

impl TagRestriction {
    /// A rule keeping the kind off terrains tagged `tag`.
    #[must_use]
    pub fn stay_off(tag: impl Into<String>) -> Self {
        Self {
            stay_off_terrain_tag: Some(tag.into()),
            stay_on_terrain_tag: None,
        }
    }

    /// A rule keeping the kind on terrains tagged `tag`.
    #[must_use]
    pub fn stay_on(tag: impl Into<String>) -> Self {
        Self {
            stay_off_terrain_tag: None,
            stay_on_terrain_tag: Some(tag.into()),
        }
    }
}

impl TerrainRestriction for TagRestriction {
    fn stay_off_tag(&self) -> Option<&str> {
        self.stay_off_terrain_tag.as_deref()
    }

    fn stay_on_tag(&self) -> Option<&str> {
        self.stay_on_terrain_tag.as_deref()
    }
}

/// OR-reduction of `rules` over `terrain`.
#[must_use]
pub fn is_unreachable(rules: &[Arc<dyn TerrainRestriction>], terrain: &Terrain) -> bool {
    rules.iter().any(|rule| rule.forbids(terrain))
}

/// Restriction rules keyed by agent kind.
///
/// Kinds without an entry are unrestricted.
#[derive(Debug, Clone, Default)]
pub struct RestrictionRegistry {
    rules: Vec<Vec<Arc<dyn TerrainRestriction>>>,
}

impl RestrictionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a rule to `kind`. Rules keep insertion order.
    pub fn attach(&mut self, kind: AgentKindId, rule: Arc<dyn TerrainRestriction>) {
        if self.rules.len() <= kind.index() {
            self.rules.resize_with(kind.index() + 1, Vec::new);
        }
        self.rules[kind.index()].push(rule);
    }

    /// Builder-style [`RestrictionRegistry::attach`] for concrete rules.
    #[must_use]
    pub fn with_rule(mut self, kind: AgentKindId, rule: impl TerrainRestriction + 'static) -> Self {
        self.attach(kind, Arc::new(rule));
        self
    }

    /// Rules attached to `kind` (empty for unknown kinds).
    #[must_use]
    pub fn rules_for(&self, kind: AgentKindId) -> &[Arc<dyn TerrainRestriction>] {
        self.rules.get(kind.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `terrain` is off limits for `kind`.
    #[must_use]
    #[inline]
    pub fn is_unreachable(&self, kind: AgentKindId, terrain: &Terrain) -> bool {
        is_unreachable(self.rules_for(kind), terrain)
    }
}
