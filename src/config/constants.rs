//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (SQLite file, created on first use)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";

/// Default upper bound on pooled database connections
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Default lower bound on pooled database connections
pub const DEFAULT_DB_MIN_CONNECTIONS: u32 = 1;

// =============================================================================
// Response Messages
// =============================================================================

/// Body message returned after a successful insert
pub const MSG_USER_SAVED: &str = "User saved!";

/// Error message for a duplicate identifier
pub const MSG_USER_EXISTS: &str = "User already exists";

/// Error message for an unknown identifier
pub const MSG_USER_NOT_FOUND: &str = "User not found";

/// Error message for a lookup without an identifier
pub const MSG_MISSING_USER_ID: &str = "Missing user id parameter";
