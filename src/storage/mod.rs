// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Todo Storage
//!
//! Handlers talk to a [`TodoStore`] so the HTTP layer does not care where
//! todos live. Two implementations exist:
//!
//! - [`PgTodoStore`] - PostgreSQL via `sqlx`, used by the server
//! - [`InMemoryTodoStore`] - process-local map, used by tests
//!
//! Every operation is a single statement against the backing store; there
//! are no multi-step transactions.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::Todo;

pub use memory::InMemoryTodoStore;
pub use postgres::PgTodoStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(i32),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD operations on todos.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos, ordered by id.
    async fn list(&self) -> StoreResult<Vec<Todo>>;

    /// Insert a new, not yet completed todo.
    async fn create(&self, text: String) -> StoreResult<Todo>;

    /// Set the completion flag and return the updated todo.
    async fn set_completed(&self, id: i32, completed: bool) -> StoreResult<Todo>;

    /// Remove a todo and return it as it was before deletion.
    async fn delete(&self, id: i32) -> StoreResult<Todo>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
