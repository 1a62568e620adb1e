use async_trait::async_trait;
use thiserror::Error;

use postboard_core::{DomainError, Post, User};

/// Result type used by store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A post referenced an author id with no matching user.
    #[error("user not found")]
    UserNotFound,

    /// A field value was rejected by the domain layer.
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// The storage backend failed (Postgres only; the in-memory store
    /// never produces this).
    #[error("storage backend error: {0}")]
    Backend(#[from] sqlx::Error),
}

/// Canonical User/Post collections: lookup-by-id and append only.
///
/// Both entities are create-only; no update or delete operations exist.
/// Insertion order is preserved by `list_*`. No ordering or atomicity
/// guarantee is made across concurrent `add_*` calls.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// All users, in insertion order.
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// The user with the given id, if any.
    async fn get_user(&self, id: i64) -> StoreResult<Option<User>>;

    /// Assign the next id, append, and return the stored user.
    async fn add_user(&self, name: &str, age: i64) -> StoreResult<User>;

    /// All posts, in insertion order.
    async fn list_posts(&self) -> StoreResult<Vec<Post>>;

    /// The post with the given id, if any.
    async fn get_post(&self, id: i64) -> StoreResult<Option<Post>>;

    /// Resolve the author, assign the next id, append, and return the
    /// stored post with the author embedded.
    ///
    /// Fails with [`StoreError::UserNotFound`] and performs no mutation
    /// when `author_id` does not resolve.
    async fn add_post(&self, title: &str, body: &str, author_id: i64) -> StoreResult<Post>;
}
