//! Data structures for movement configuration.
//!
//! Stats, terrains and agent kinds are described by plain serde types
//! deserialized from RON, then resolved into the registries the cost
//! model reads (see [`crate::catalog::MovementCatalog`]).
//!
//! **Note:** This module contains no IO - it only defines data types.
//! File loading is handled by `terrain_tools` and by hosts.

mod agent_kind_data;
mod movement_data;
mod terrain_data;

pub use agent_kind_data::{AgentKindData, RestrictionData};
pub use movement_data::MovementData;
pub use terrain_data::{StatPairData, TerrainData};
