use sea_orm::entity::prelude::*;

/// Per-owner pack claim state.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pack_resource")]
pub struct Model {
    /// Discord user ID of the owner.
    #[sea_orm(primary_key, auto_increment = false)]
    pub owner_id: i64,
    pub uses: i32,
    pub daily_cooldown: Option<DateTimeUtc>,
    pub weekly_cooldown: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
