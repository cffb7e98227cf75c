// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response types for the todo API. All types derive
//! `Serialize`/`Deserialize` and `ToSchema` for JSON handling and the
//! OpenAPI document.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A todo item.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, sqlx::FromRow)]
pub struct Todo {
    /// Auto-incrementing identifier.
    pub id: i32,
    /// What needs doing.
    pub text: String,
    /// Whether the todo is done.
    pub completed: bool,
}

/// Request to create a todo.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    /// Must not be empty.
    pub text: String,
}

/// Request to mark a todo as done or not done.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToggleTodoRequest {
    pub completed: bool,
}
