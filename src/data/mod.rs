//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models. They are
//! generic over [`sea_orm::ConnectionTrait`] so the same repository works on a plain
//! connection or inside a claim transaction.

pub mod catalog;
pub mod item_instance;
pub mod pack_resource;

#[cfg(test)]
mod test;
