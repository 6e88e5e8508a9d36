//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection, pool lifecycle and schema
//! - Repositories over the `users` table

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
