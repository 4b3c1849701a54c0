use crate::server::data::event::EventRepository;
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod insert;
mod recent;
