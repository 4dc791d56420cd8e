//! PostgreSQL storage backend

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::types::{NewUser, User, UserId};
use crate::Result;

use super::UserStore;

const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS users (id SERIAL PRIMARY KEY, name TEXT, email TEXT)";
// Columns are nullable; rows written by other clients may hold NULL.
const SELECT_ALL: &str =
    "SELECT id, COALESCE(name, '') AS name, COALESCE(email, '') AS email FROM users";
const SELECT_ONE: &str =
    "SELECT id, COALESCE(name, '') AS name, COALESCE(email, '') AS email FROM users WHERE id = $1";
const INSERT: &str = "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id";
const UPDATE: &str = "UPDATE users SET name = $1, email = $2 WHERE id = $3";

/// Store backed by a shared sqlx connection pool
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Open a pool with the driver's default sizing
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new().connect(url).await?;
        Ok(Self::new(pool))
    }

    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PostgresStore {
    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn insert(&self, user: &NewUser) -> Result<UserId> {
        let id: UserId = sqlx::query_scalar(INSERT)
            .bind(&user.name)
            .bind(&user.email)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn get(&self, id: UserId) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn update(&self, id: UserId, user: &NewUser) -> Result<u64> {
        let result = sqlx::query(UPDATE)
            .bind(&user.name)
            .bind(&user.email)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
