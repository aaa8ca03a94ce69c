//! # Terrain Development Tools
//!
//! Command-line tools for movement data:
//! - Data validators
//! - Cost tables per agent kind and terrain

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod error;
pub mod loader;
pub mod table;
pub mod validate;
