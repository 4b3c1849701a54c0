//! Telemetry ingestion backend.
//!
//! This module contains the complete server implementation: API endpoints,
//! state reconciliation logic, data access, and infrastructure services. The
//! backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, required-field
//!   validation, and DTO conversion
//! - **Service Layer** (`service/`) - Ingestion logic orchestration between
//!   controllers and the data layer
//! - **Data Layer** (`data/`) - Database operations owning the SQL-level contracts
//!   (insert-or-ignore, monotonic-max update) and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the bounded connection pool)
//! - **Startup** (`startup`) - Database connection and migration on boot
//! - **Router** (`router`) - Axum route configuration
//! - **Docs** (`doc`) - OpenAPI aggregation for the endpoint annotations
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** validates required fields, converts the DTO to params,
//!    calls the service
//! 3. **Service** executes the ingestion logic, orchestrates data operations
//! 4. **Data** runs one self-contained statement per call, converts entities
//!    to domain models
//! 5. **Controller** converts the outcome to a response DTO
//!
//! There is no server-held session state: every request is independent and all
//! coordination happens through the datastore.

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
