//! User Records - a small HTTP service storing `(id, name)` user records.
//!
//! The service persists records in a single `users` table keyed by a
//! caller-supplied identifier and exposes create/lookup endpoints over
//! Axum, backed by SeaORM (SQLite or PostgreSQL).
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: The `UserRecord` entity
//! - **services**: Record store contract (preconditions, not-found mapping)
//! - **infra**: Database connection, schema and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Bind a different port
//! PORT=8080 cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::UserRecord;
pub use errors::{AppError, AppResult};
pub use infra::Database;
