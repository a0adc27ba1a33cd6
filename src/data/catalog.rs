//! Catalog data repository.
//!
//! The catalog itself is owned by the surrounding game; this repository only answers
//! the pool query a pack needs.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::{config::RarityBounds, model::catalog::CatalogItem};

use entity::catalog_item::Column;

pub struct CatalogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the candidate pool for a pack.
    ///
    /// Returns every enabled, tradeable item whose rarity lies within `bounds`
    /// (inclusive on both ends), ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<CatalogItem>)` - Matching items (empty if none match)
    /// - `Err(DbErr)` - Database error during query
    pub async fn filter_eligible(&self, bounds: RarityBounds) -> Result<Vec<CatalogItem>, DbErr> {
        let entities = entity::prelude::CatalogItem::find()
            .filter(Column::Enabled.eq(true))
            .filter(Column::Tradeable.eq(true))
            .filter(Column::Rarity.between(bounds.min, bounds.max))
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CatalogItem::from_entity).collect())
    }
}
