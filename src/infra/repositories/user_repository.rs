//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::UserRecord;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Owns the `users` table. Uniqueness of `id` is enforced by the table's
/// primary key, not by a read-before-write.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserRecord>>;

    /// Insert a new record.
    ///
    /// Fails with [`AppError::DuplicateKey`] when the id is taken.
    async fn insert(&self, record: UserRecord) -> AppResult<UserRecord>;

    /// List all users ordered by ID
    async fn list(&self) -> AppResult<Vec<UserRecord>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<UserRecord>> {
        let result = UserEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(UserRecord::from))
    }

    async fn insert(&self, record: UserRecord) -> AppResult<UserRecord> {
        let active_model = ActiveModel {
            id: Set(record.id.clone()),
            name: Set(record.name.clone()),
        };

        UserEntity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| AppError::from_insert(e, &record.id))?;

        Ok(record)
    }

    async fn list(&self) -> AppResult<Vec<UserRecord>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(UserRecord::from).collect())
    }
}
