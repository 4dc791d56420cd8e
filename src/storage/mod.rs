//! Storage abstraction layer
//!
//! Provides a unified interface over PostgreSQL and an in-memory store

use async_trait::async_trait;

use crate::types::{NewUser, User, UserId};
use crate::Result;

pub mod memory;
pub mod postgres;

/// User store trait
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create the `users` table if it does not exist
    async fn ensure_schema(&self) -> Result<()>;

    /// All users, in whatever order the backend yields them
    async fn list(&self) -> Result<Vec<User>>;

    /// Insert a user and return the id assigned by the backend
    async fn insert(&self, user: &NewUser) -> Result<UserId>;

    /// Look up a single user
    async fn get(&self, id: UserId) -> Result<Option<User>>;

    /// Overwrite name and email of a user, returning the number of rows touched
    async fn update(&self, id: UserId, user: &NewUser) -> Result<u64>;
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Postgres { url: String },
    Memory,
}

/// Create user store from config
pub async fn create_store(config: StoreConfig) -> Result<Box<dyn UserStore>> {
    match config {
        StoreConfig::Postgres { url } => {
            let backend = postgres::PostgresStore::connect(&url).await?;
            Ok(Box::new(backend))
        }
        StoreConfig::Memory => Ok(Box::new(memory::MemoryStore::new())),
    }
}
