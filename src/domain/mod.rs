//! Domain layer - Core business entities
//!
//! This module contains the core domain model independent of
//! infrastructure concerns.

pub mod user;

pub use user::UserRecord;
