use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PackResource::Table)
                    .if_not_exists()
                    .col(big_integer(PackResource::OwnerId).primary_key())
                    .col(integer(PackResource::Uses).default(0))
                    .col(timestamp_with_time_zone_null(PackResource::DailyCooldown))
                    .col(timestamp_with_time_zone_null(PackResource::WeeklyCooldown))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PackResource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PackResource {
    Table,
    OwnerId,
    Uses,
    DailyCooldown,
    WeeklyCooldown,
}
