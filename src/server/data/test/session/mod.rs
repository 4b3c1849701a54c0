use crate::server::data::session::SessionRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod close;
mod create;
mod find_owner;
