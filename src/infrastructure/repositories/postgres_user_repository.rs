use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::repositories::{RepositoryError, UserRepository};
use crate::domain::user::{User, UserPayload};
use crate::infrastructure::database;

/// PostgreSQL implementation of UserRepository
///
/// Holds a clone of the shared pool; sqlx serializes access per connection.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, payload: UserPayload) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(payload.name.as_str())
        .bind(payload.email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update(&self, id: i32, payload: UserPayload) -> Result<Option<User>, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $1, email = $2
            WHERE id = $3
            "#,
        )
        .bind(payload.name.as_str())
        .bind(payload.email.as_str())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(payload.into_user(id)))
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        database::ping(&self.pool).await?;
        Ok(())
    }
}
