//! Pack resource data repository.
//!
//! Provides the `PackResourceRepository` for reading and updating per-owner claim state.
//! Claims go through [`PackResourceRepository::compare_and_swap`], a single conditional
//! UPDATE that only applies when the stored row still matches the state the claim was
//! computed from.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::pack_resource::PackResource;
#[cfg(test)]
use crate::model::claim::ClaimKind;

use entity::pack_resource::Column;

/// Repository providing database operations for pack resources.
pub struct PackResourceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PackResourceRepository<'a, C> {
    /// Creates a new PackResourceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the pack resource of an owner.
    ///
    /// # Returns
    /// - `Ok(Some(PackResource))` - Owner has claimed before
    /// - `Ok(None)` - No resource exists for the owner yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_owner(&self, owner_id: u64) -> Result<Option<PackResource>, DbErr> {
        let entity = entity::prelude::PackResource::find_by_id(owner_id as i64)
            .one(self.db)
            .await?;

        Ok(entity.map(PackResource::from_entity))
    }

    /// Gets the pack resource of an owner, creating a fresh one on first use.
    ///
    /// The insert ignores conflicts, so two first-time claims racing each other both
    /// end up reading the same row.
    ///
    /// # Returns
    /// - `Ok(PackResource)` - Existing or newly created resource
    /// - `Err(DbErr)` - Database error during insert or query
    pub async fn get_or_create(&self, owner_id: u64) -> Result<PackResource, DbErr> {
        if let Some(resource) = self.find_by_owner(owner_id).await? {
            return Ok(resource);
        }

        let fresh = PackResource::new(owner_id);

        entity::prelude::PackResource::insert(entity::pack_resource::ActiveModel {
            owner_id: ActiveValue::Set(fresh.owner_id as i64),
            uses: ActiveValue::Set(fresh.uses as i32),
            daily_cooldown: ActiveValue::Set(fresh.daily_cooldown),
            weekly_cooldown: ActiveValue::Set(fresh.weekly_cooldown),
        })
        .on_conflict(OnConflict::column(Column::OwnerId).do_nothing().to_owned())
        .exec_without_returning(self.db)
        .await?;

        self.find_by_owner(owner_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("pack resource for owner {}", owner_id))
        })
    }

    /// Stamps the daily cooldown at `at`.
    #[cfg(test)]
    pub async fn set_daily_cooldown(&self, owner_id: u64, at: DateTime<Utc>) -> Result<(), DbErr> {
        self.set_cooldown(owner_id, ClaimKind::Daily, at).await
    }

    /// Stamps the weekly cooldown at `at`.
    #[cfg(test)]
    pub async fn set_weekly_cooldown(
        &self,
        owner_id: u64,
        at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        self.set_cooldown(owner_id, ClaimKind::Weekly, at).await
    }

    /// Stamps the cooldown of a claim path without touching `uses`.
    ///
    /// # Returns
    /// - `Ok(())` - Cooldown updated (or no resource exists for the owner)
    /// - `Err(DbErr)` - Database error during update
    #[cfg(test)]
    pub async fn set_cooldown(
        &self,
        owner_id: u64,
        kind: ClaimKind,
        at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let mut model = entity::pack_resource::ActiveModel::default();
        match kind {
            ClaimKind::Daily => model.daily_cooldown = ActiveValue::Set(Some(at)),
            ClaimKind::Weekly => model.weekly_cooldown = ActiveValue::Set(Some(at)),
        }

        entity::prelude::PackResource::update_many()
            .set(model)
            .filter(Column::OwnerId.eq(owner_id as i64))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Clears the daily cooldown and resets `uses` to 0 in one statement.
    #[cfg(test)]
    pub async fn remove_daily_cooldown(&self, owner_id: u64) -> Result<(), DbErr> {
        entity::prelude::PackResource::update_many()
            .set(entity::pack_resource::ActiveModel {
                uses: ActiveValue::Set(0),
                daily_cooldown: ActiveValue::Set(None),
                ..Default::default()
            })
            .filter(Column::OwnerId.eq(owner_id as i64))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Clears the weekly cooldown only; `uses` is left as is.
    #[cfg(test)]
    pub async fn remove_weekly_cooldown(&self, owner_id: u64) -> Result<(), DbErr> {
        entity::prelude::PackResource::update_many()
            .set(entity::pack_resource::ActiveModel {
                weekly_cooldown: ActiveValue::Set(None),
                ..Default::default()
            })
            .filter(Column::OwnerId.eq(owner_id as i64))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Writes `next` only if the stored row still equals `current`.
    ///
    /// The WHERE clause covers every mutable column, so a concurrent claim or cooldown
    /// change since `current` was read makes this a no-op.
    ///
    /// # Arguments
    /// - `current` - State the transition was computed from
    /// - `next` - State to persist
    ///
    /// # Returns
    /// - `Ok(true)` - Row matched and was updated
    /// - `Ok(false)` - Row changed concurrently (or vanished); nothing written
    /// - `Err(DbErr)` - Database error during update
    pub async fn compare_and_swap(
        &self,
        current: &PackResource,
        next: &PackResource,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::PackResource::update_many()
            .set(entity::pack_resource::ActiveModel {
                uses: ActiveValue::Set(next.uses as i32),
                daily_cooldown: ActiveValue::Set(next.daily_cooldown),
                weekly_cooldown: ActiveValue::Set(next.weekly_cooldown),
                ..Default::default()
            })
            .filter(Column::OwnerId.eq(current.owner_id as i64))
            .filter(Column::Uses.eq(current.uses as i32))
            .filter(cooldown_matches(Column::DailyCooldown, current.daily_cooldown))
            .filter(cooldown_matches(
                Column::WeeklyCooldown,
                current.weekly_cooldown,
            ))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets every pack resource, ordered by owner.
    pub async fn get_all(&self) -> Result<Vec<PackResource>, DbErr> {
        let entities = entity::prelude::PackResource::find()
            .order_by_asc(Column::OwnerId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PackResource::from_entity).collect())
    }
}

fn cooldown_matches(column: Column, value: Option<DateTime<Utc>>) -> Condition {
    match value {
        Some(at) => Condition::all().add(column.eq(at)),
        None => Condition::all().add(column.is_null()),
    }
}
