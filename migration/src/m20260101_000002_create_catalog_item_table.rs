use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CatalogItem::Table)
                    .if_not_exists()
                    .col(pk_auto(CatalogItem::Id))
                    .col(string(CatalogItem::Name))
                    .col(double(CatalogItem::Rarity))
                    .col(boolean(CatalogItem::Enabled).default(true))
                    .col(boolean(CatalogItem::Tradeable).default(true))
                    .col(integer(CatalogItem::Health))
                    .col(integer(CatalogItem::Attack))
                    .to_owned(),
            )
            .await?;

        // Pack pools are always filtered by rarity range
        manager
            .create_index(
                Index::create()
                    .name("idx_catalog_item_rarity")
                    .table(CatalogItem::Table)
                    .col(CatalogItem::Rarity)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_catalog_item_rarity")
                    .table(CatalogItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CatalogItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CatalogItem {
    Table,
    Id,
    Name,
    Rarity,
    Enabled,
    Tradeable,
    Health,
    Attack,
}
