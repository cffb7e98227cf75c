// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::ApiError,
    models::{CreateTodoRequest, Todo, ToggleTodoRequest},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/v1/todos",
    tag = "Todos",
    responses((status = 200, body = [Todo]))
)]
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.todos.list().await?))
}

#[utoipa::path(
    post,
    path = "/v1/todos",
    request_body = CreateTodoRequest,
    tag = "Todos",
    responses(
        (status = 201, body = Todo),
        (status = 422, description = "Text is empty")
    )
)]
pub async fn create_todo(
    State(state): State<AppState>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    if request.text.is_empty() {
        return Err(ApiError::unprocessable("text must not be empty"));
    }

    let todo = state.todos.create(request.text).await?;
    tracing::debug!(todo_id = todo.id, "Todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

#[utoipa::path(
    put,
    path = "/v1/todos/{id}",
    params(
        ("id" = i32, Path, description = "Identifier of the todo to update")
    ),
    request_body = ToggleTodoRequest,
    tag = "Todos",
    responses(
        (status = 200, body = Todo),
        (status = 404, description = "Todo not found")
    )
)]
pub async fn toggle_todo(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<ToggleTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.todos.set_completed(id, request.completed).await?;
    Ok(Json(todo))
}

#[utoipa::path(
    delete,
    path = "/v1/todos/{id}",
    params(
        ("id" = i32, Path, description = "Identifier of the todo to delete")
    ),
    tag = "Todos",
    responses(
        (status = 200, description = "The deleted todo", body = Todo),
        (status = 404, description = "Todo not found")
    )
)]
pub async fn delete_todo(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.todos.delete(id).await?;
    tracing::debug!(todo_id = todo.id, "Todo deleted");
    Ok(Json(todo))
}
