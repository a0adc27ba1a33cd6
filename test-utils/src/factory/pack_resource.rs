//! Pack resource factory for seeding claim state.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating pack resources in a specific claim state.
///
/// # Example
///
/// ```rust,ignore
/// let resource = PackResourceFactory::new(&db)
///     .owner_id(42)
///     .uses(3)
///     .daily_cooldown(Utc::now() - Duration::hours(2))
///     .build()
///     .await?;
/// ```
pub struct PackResourceFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i64,
    uses: i32,
    daily_cooldown: Option<DateTime<Utc>>,
    weekly_cooldown: Option<DateTime<Utc>>,
}

impl<'a> PackResourceFactory<'a> {
    /// Creates a new PackResourceFactory with default values.
    ///
    /// Defaults:
    /// - owner_id: auto-incremented
    /// - uses: `0`
    /// - no cooldowns
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            owner_id: next_id() as i64,
            uses: 0,
            daily_cooldown: None,
            weekly_cooldown: None,
        }
    }

    pub fn owner_id(mut self, owner_id: u64) -> Self {
        self.owner_id = owner_id as i64;
        self
    }

    pub fn uses(mut self, uses: i32) -> Self {
        self.uses = uses;
        self
    }

    pub fn daily_cooldown(mut self, at: DateTime<Utc>) -> Self {
        self.daily_cooldown = Some(at);
        self
    }

    pub fn weekly_cooldown(mut self, at: DateTime<Utc>) -> Self {
        self.weekly_cooldown = Some(at);
        self
    }

    /// Builds and inserts the pack resource into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pack_resource::Model)` - Created pack resource
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate owner)
    pub async fn build(self) -> Result<entity::pack_resource::Model, DbErr> {
        entity::pack_resource::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            uses: ActiveValue::Set(self.uses),
            daily_cooldown: ActiveValue::Set(self.daily_cooldown),
            weekly_cooldown: ActiveValue::Set(self.weekly_cooldown),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a fresh pack resource for the given owner.
pub async fn create_pack_resource(
    db: &DatabaseConnection,
    owner_id: u64,
) -> Result<entity::pack_resource::Model, DbErr> {
    PackResourceFactory::new(db).owner_id(owner_id).build().await
}
