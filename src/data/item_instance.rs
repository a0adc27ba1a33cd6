//! Item instance data repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
#[cfg(test)]
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::model::catalog::{CreateItemInstanceParam, ItemInstance};

/// Repository for catalog items granted to owners.
pub struct ItemInstanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemInstanceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Grants a catalog item to an owner, stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(ItemInstance)` - The created instance
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown catalog item)
    pub async fn create(&self, param: CreateItemInstanceParam) -> Result<ItemInstance, DbErr> {
        let entity = entity::item_instance::ActiveModel {
            id: ActiveValue::NotSet,
            owner_id: ActiveValue::Set(param.owner_id as i64),
            catalog_item_id: ActiveValue::Set(param.catalog_item_id),
            health_bonus: ActiveValue::Set(param.health_bonus),
            attack_bonus: ActiveValue::Set(param.attack_bonus),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(ItemInstance::from_entity(entity))
    }

    /// Gets every instance owned by `owner_id`, oldest first.
    #[cfg(test)]
    pub async fn get_by_owner(&self, owner_id: u64) -> Result<Vec<ItemInstance>, DbErr> {
        let entities = entity::prelude::ItemInstance::find()
            .filter(entity::item_instance::Column::OwnerId.eq(owner_id as i64))
            .order_by_asc(entity::item_instance::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ItemInstance::from_entity).collect())
    }
}
