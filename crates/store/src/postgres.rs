//! Postgres-backed entity store.
//!
//! Same contract as the in-memory store; ids come from `BIGSERIAL` instead
//! of the length+1 scheme, and reads join `users` so every post carries its
//! author embedded. Store access is request-scoped: each statement checks a
//! connection out of the pool and returns it on every exit path.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use postboard_core::{user, Post, User};

use crate::entity_store::{EntityStore, StoreError, StoreResult};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        age BIGINT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS posts (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        body TEXT NOT NULL,
        author_id BIGINT NOT NULL REFERENCES users (id)
    )
    "#,
];

/// Entity store backed by a `users`/`posts` table pair.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connect to the database and apply the idempotent schema.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;

        for statement in SCHEMA {
            sqlx::query(statement).execute(&pool).await?;
        }

        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests, shared wiring).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the fixture rows (users 1-3, posts 1-3) into an empty database.
    /// A database that already holds users is left untouched.
    pub async fn seed(&self) -> StoreResult<()> {
        let count: i64 = sqlx::query("SELECT COUNT(*) AS n FROM users")
            .fetch_one(&self.pool)
            .await?
            .try_get("n")?;
        if count > 0 {
            return Ok(());
        }

        sqlx::query(
            r#"
            INSERT INTO users (name, age)
            VALUES ('Petro', 32), ('Adam', 27), ('Nick', 25)
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO posts (title, body, author_id)
            VALUES ('New 1', 'Body 1', 1), ('New 2', 'Body 2', 2), ('New 3', 'Body 3', 3)
            "#,
        )
        .execute(&self.pool)
        .await?;

        tracing::info!("seeded fixture users and posts");
        Ok(())
    }
}

fn user_from_row(row: &sqlx::postgres::PgRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        age: row.try_get("age")?,
    })
}

fn post_from_row(row: &sqlx::postgres::PgRow) -> Result<Post, sqlx::Error> {
    Ok(Post {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        author: User {
            id: row.try_get("author_id")?,
            name: row.try_get("author_name")?,
            age: row.try_get("author_age")?,
        },
    })
}

const POST_COLUMNS: &str = r#"
    p.id, p.title, p.body,
    u.id AS author_id, u.name AS author_name, u.age AS author_age
"#;

#[async_trait]
impl EntityStore for PostgresStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let rows = sqlx::query("SELECT id, name, age FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| user_from_row(row).map_err(StoreError::from))
            .collect()
    }

    async fn get_user(&self, id: i64) -> StoreResult<Option<User>> {
        let row = sqlx::query("SELECT id, name, age FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose().map_err(StoreError::from)
    }

    async fn add_user(&self, name: &str, age: i64) -> StoreResult<User> {
        user::validate_name(name)?;
        user::validate_age(age)?;

        let row = sqlx::query(
            "INSERT INTO users (name, age) VALUES ($1, $2) RETURNING id, name, age",
        )
        .bind(name)
        .bind(age)
        .fetch_one(&self.pool)
        .await?;

        Ok(user_from_row(&row)?)
    }

    async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.author_id ORDER BY p.id"
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| post_from_row(row).map_err(StoreError::from))
            .collect()
    }

    async fn get_post(&self, id: i64) -> StoreResult<Option<Post>> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts p JOIN users u ON u.id = p.author_id WHERE p.id = $1"
        );
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;

        row.as_ref().map(post_from_row).transpose().map_err(StoreError::from)
    }

    async fn add_post(&self, title: &str, body: &str, author_id: i64) -> StoreResult<Post> {
        let author = self
            .get_user(author_id)
            .await?
            .ok_or(StoreError::UserNotFound)?;

        let row = sqlx::query(
            "INSERT INTO posts (title, body, author_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(title)
        .bind(body)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await?;

        let id: i64 = row.try_get("id")?;
        Ok(Post::new(id, title, body, author))
    }
}
