use async_trait::async_trait;
use thiserror::Error;

use crate::domain::user::{User, UserPayload};

/// Storage failure surfaced by a repository
///
/// Absence of a row is not an error: lookups return `None` and writes report
/// whether a row was touched.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Repository trait for the user resource
///
/// Every method is a single auto-committed statement.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user, ordered by ID
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;

    /// Insert a user and return it with the storage-assigned ID
    async fn create(&self, payload: UserPayload) -> Result<User, RepositoryError>;

    /// Overwrite name and email; `None` when no row has this ID
    async fn update(&self, id: i32, payload: UserPayload) -> Result<Option<User>, RepositoryError>;

    /// Delete a user; `false` when no row has this ID
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;

    /// Round-trip liveness probe
    async fn ping(&self) -> Result<(), RepositoryError>;
}
