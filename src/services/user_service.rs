//! User service - The record store contract.
//!
//! Checks preconditions before touching storage and turns absent rows
//! into [`AppError::NotFound`].

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::UserRecord;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Store a new record.
    ///
    /// Empty `id` or `name` fails with [`AppError::Validation`] without a
    /// store call; a taken `id` fails with [`AppError::DuplicateKey`].
    async fn create_user(&self, id: String, name: String) -> AppResult<UserRecord>;

    /// Get the record stored under `id`
    async fn get_user(&self, id: &str) -> AppResult<UserRecord>;

    /// List all records ordered by id
    async fn list_users(&self) -> AppResult<Vec<UserRecord>>;
}

/// Concrete implementation of UserService using a repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, id: String, name: String) -> AppResult<UserRecord> {
        let record = UserRecord::new(id, name);

        let missing = record.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::validation(format!("{} required", missing.join(" and "))));
        }

        match self.repo.insert(record).await {
            Ok(saved) => {
                tracing::info!(user_id = %saved.id, name = %saved.name, "User saved");
                Ok(saved)
            }
            Err(AppError::DuplicateKey(id)) => {
                tracing::warn!(user_id = %id, "Rejected duplicate user id");
                Err(AppError::DuplicateKey(id))
            }
            Err(e) => Err(e),
        }
    }

    async fn get_user(&self, id: &str) -> AppResult<UserRecord> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        self.repo.list().await
    }
}
