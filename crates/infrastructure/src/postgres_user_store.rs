//! PostgreSQL-backed user store.

use async_trait::async_trait;
use sqlx::PgPool;

use userdeck_application::UserStore;
use userdeck_domain::{StoreError, User};

/// PostgreSQL implementation of the user store port.
///
/// Holds a connection pool owned by the caller; this adapter manages neither
/// the pool's lifecycle nor the schema.
#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    /// Creates a store with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    email_verified: bool,
    image: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            email_verified: row.email_verified,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, email_verified, image, created_at, updated_at
            FROM users
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| StoreError::new(format!("failed to find user by id: {error}")))?;

        Ok(row.map(User::from))
    }

    async fn insert_returning(&self, user: &User) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, name, email, email_verified, image, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, email_verified, image, created_at, updated_at
            "#,
        )
        .bind(user.id.as_str())
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(user.email_verified)
        .bind(user.image.as_deref())
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| StoreError::new(format!("failed to insert user: {error}")))?;

        Ok(User::from(row))
    }

    async fn delete_by_id(&self, user_id: &str) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|error| StoreError::new(format!("failed to delete user: {error}")))?;

        // Zero affected rows is still success: delete is idempotent.
        tracing::debug!(user_id, rows = result.rows_affected(), "deleted user rows");

        Ok(())
    }
}

#[cfg(test)]
mod tests;
