//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! relation in the telemetry schema. Repositories use SeaORM entity models internally
//! and return domain models to maintain separation between the data layer and the
//! service layer. Every method is one self-contained statement that commits before
//! returning; services never span repository calls in a single transaction, so each
//! sub-step of a multi-step handler must be independently idempotent or monotonic.

pub mod event;
pub mod save_file;
pub mod session;
pub mod user;

#[cfg(test)]
mod test;
