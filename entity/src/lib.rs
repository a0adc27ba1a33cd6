//! SeaORM entity definitions for the pack drop bot.
//!
//! This is the single canonical schema for pack state. Any secondary consumer
//! (admin tooling, analytics) reads exported records instead of redefining
//! these models.

pub mod prelude;

pub mod catalog_item;
pub mod item_instance;
pub mod pack_resource;
