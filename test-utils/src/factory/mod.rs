//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let item = factory::create_catalog_item(&db, 7.5).await?;
//!
//! let resource = factory::pack_resource::PackResourceFactory::new(&db)
//!     .uses(2)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `catalog_item` - Create catalog item entities
//! - `pack_resource` - Create pack resource entities
//! - `helpers` - Unique ID generation

pub mod catalog_item;
pub mod helpers;
pub mod pack_resource;

pub use catalog_item::create_catalog_item;
pub use pack_resource::create_pack_resource;
