//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! testing pure logic such as pool selection and rarity lookups.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let item = fixture::catalog_item::entity_with_rarity(7.5);
//! ```

pub mod catalog_item;
