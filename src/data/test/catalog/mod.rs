use crate::{config::RarityBounds, data::catalog::CatalogRepository};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{catalog_item::CatalogItemFactory, create_catalog_item},
};

mod filter_eligible;
