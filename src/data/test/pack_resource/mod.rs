use crate::{
    data::pack_resource::PackResourceRepository,
    model::{claim::ClaimKind, pack_resource::PackResource},
};
use chrono::{TimeDelta, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::pack_resource::PackResourceFactory};

mod compare_and_swap;
mod get_all;
mod get_or_create;
mod remove_cooldown;
mod set_cooldown;
