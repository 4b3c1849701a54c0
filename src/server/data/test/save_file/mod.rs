use crate::server::data::save_file::SaveFileRepository;
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod insert_snapshot;
