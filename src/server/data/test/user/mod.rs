use crate::server::data::user::UserRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod register_if_absent;
mod sync_playtime_if_higher;
mod top_by_playtime;
