//! Database connection and initialization.

use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Schema,
    Statement,
};

use crate::config::DatabaseConfig;
use crate::infra::repositories::entities::UserEntity;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the connection pool and create the `users` table if absent.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(8))
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        let db = Self { connection };
        db.ensure_schema().await?;

        tracing::info!(
            backend = ?db.connection.get_database_backend(),
            "Database connected and schema ensured"
        );

        Ok(db)
    }

    /// Create the `users` table from its entity definition unless it
    /// already exists. Existing rows are never touched.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        let schema = Schema::new(backend);
        let mut create = schema.create_table_from_entity(UserEntity);
        create.if_not_exists();

        self.connection.execute(backend.build(&create)).await?;
        Ok(())
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    /// Close the pool. Clones handed out by [`Database::get_connection`]
    /// share the pool and stop working afterwards.
    pub async fn close(self) -> Result<(), DbErr> {
        self.connection.close().await
    }
}
