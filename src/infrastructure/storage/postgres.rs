use crate::core::errors::ProbeError;
use crate::core::models::user::User;
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use log::{debug, info};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

const USER_COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at";

pub struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    /// Opens a single-connection pool; the diagnostics never run queries in parallel.
    pub async fn connect(database_url: &str, acquire_timeout: Duration) -> Result<Self, ProbeError> {
        info!("Connecting to database");
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(acquire_timeout)
            .connect(database_url)
            .await?;
        debug!("Database connection established");
        Ok(PostgresStorage { pool })
    }

    pub async fn close(self) {
        self.pool.close().await;
        debug!("Database connection closed");
    }
}

#[async_trait]
impl Storage for PostgresStorage {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, ProbeError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}
