//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary so the
//! service layer and bot handlers never touch SeaORM types directly.

pub mod catalog;
pub mod claim;
pub mod pack_resource;
pub mod rarity;
