//! # Terrain Core
//!
//! Terrain-aware movement costs for grid path search.
//!
//! Given an agent, a destination cell and read-only map state, this crate
//! answers two questions a path search asks on every edge:
//! - May this agent occupy the cell at all?
//! - How many ticks does stepping into it cost?
//!
//! Terrains declare which `(speed stat, cost stat)` pairs apply to them;
//! the agent uses whichever pair makes it fastest. Restraint, burden,
//! weather, diagonal moves, edifices, leaders and urgency then shape the
//! final cost.
//!
//! Everything here is pure and deterministic:
//! - No IO
//! - No shared mutable state
//! - Identical inputs give bit-identical `f32` results
//!
//! ## Crate Structure
//!
//! - [`selector`] - Best stat pair per agent and terrain
//! - [`crossing`] - Ticks to cross one cell
//! - [`entry_cost`] - Full edge cost with leaders and urgency
//! - [`restriction`] - Terrain tag rules per agent kind
//! - [`model`] - Strategy plugged into a path search
//! - [`data`] - RON-deserializable movement definitions
//! - [`grid`] - In-memory map for tools and tests

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod agent;
pub mod catalog;
pub mod crossing;
pub mod data;
pub mod entry_cost;
pub mod error;
pub mod grid;
pub mod ids;
pub mod map;
pub mod model;
pub mod restriction;
pub mod selector;
pub mod stats;
pub mod terrain;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::agent::{Agent, JobDescriptor, LocomotionUrgency, ThingCategory};
    pub use crate::catalog::{AgentKind, AgentKindRegistry, MovementCatalog};
    pub use crate::crossing::{
        ticks_to_cross, ticks_to_cross_cardinal, ticks_to_cross_cell, ticks_to_cross_diagonal,
        MAX_CELL_COST, MIN_CELL_COST,
    };
    pub use crate::data::MovementData;
    pub use crate::entry_cost::{
        cost_to_enter, cost_to_enter_from_position, explain_cost_to_enter, EntryCost,
    };
    pub use crate::error::{MovementError, Result};
    pub use crate::grid::{Edifice, GridPos, MovementGrid, WeatherState};
    pub use crate::ids::{AgentId, AgentKindId, TerrainId};
    pub use crate::map::MovementMap;
    pub use crate::model::{PathCostModel, TerrainAwareMovement};
    pub use crate::restriction::{RestrictionRegistry, TagRestriction, TerrainRestriction};
    pub use crate::selector::{
        best_movement_stats, terrain_move_cost, terrain_move_stat, terrain_speed,
    };
    pub use crate::stats::{StatBlock, StatId, StatRegistry};
    pub use crate::terrain::{StatPair, Terrain, TerrainRegistry};
}
