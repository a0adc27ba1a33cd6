use crate::{data::item_instance::ItemInstanceRepository, model::catalog::CreateItemInstanceParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::create_catalog_item};

mod create;
