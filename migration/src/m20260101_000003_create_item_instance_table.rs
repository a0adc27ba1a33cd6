use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_catalog_item_table::CatalogItem;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemInstance::Table)
                    .if_not_exists()
                    .col(pk_auto(ItemInstance::Id))
                    .col(big_integer(ItemInstance::OwnerId))
                    .col(integer(ItemInstance::CatalogItemId))
                    .col(integer(ItemInstance::HealthBonus))
                    .col(integer(ItemInstance::AttackBonus))
                    .col(timestamp_with_time_zone(ItemInstance::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_instance_catalog_item_id")
                            .from(ItemInstance::Table, ItemInstance::CatalogItemId)
                            .to(CatalogItem::Table, CatalogItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_item_instance_owner_id")
                    .table(ItemInstance::Table)
                    .col(ItemInstance::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_item_instance_owner_id")
                    .table(ItemInstance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ItemInstance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ItemInstance {
    Table,
    Id,
    OwnerId,
    CatalogItemId,
    HealthBonus,
    AttackBonus,
    CreatedAt,
}
