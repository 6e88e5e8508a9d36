use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message-only response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User saved!")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Name-only lookup response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NameResponse {
    #[schema(example = "Alice")]
    pub name: String,
}
