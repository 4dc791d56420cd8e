//! user-api - A small JSON HTTP API for user records
//!
//! Exposes list, create, get and update over a single `users` table:
//! - axum router with four routes
//! - PostgreSQL storage through sqlx, or an in-memory store for local runs
//! - Structured logging with tracing

pub mod api;
pub mod config;
pub mod error;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
