//! User record domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored user: a caller-chosen identifier and a display name.
///
/// At most one record exists per `id`. Records are never updated or
/// deleted once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserRecord {
    /// Unique user identifier (primary key)
    #[schema(example = "u1")]
    pub id: String,
    /// User display name
    #[schema(example = "Alice")]
    pub name: String,
}

impl UserRecord {
    /// Create a record from its parts
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Names of the required fields that are empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.id.is_empty() {
            missing.push("id");
        }
        if self.name.is_empty() {
            missing.push("name");
        }
        missing
    }
}
