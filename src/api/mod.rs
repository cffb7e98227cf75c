// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::HeaderName,
    routing::{get, put},
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::Session,
    config::{EnvironmentLabel, NodeEnv},
    models::{CreateTodoRequest, Todo, ToggleTodoRequest},
    state::AppState,
};

pub mod auth;
pub mod health;
pub mod todos;

const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn router(state: AppState) -> Router {
    let cors = state.auth.cors_layer();
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let v1_routes = Router::new()
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todos/{id}",
            put(todos::toggle_todo).delete(todos::delete_todo),
        );

    let auth_routes = Router::new()
        .route("/ok", get(auth::ok))
        .route("/get-session", get(auth::get_session));

    Router::new()
        .nest("/v1", v1_routes)
        .nest("/api/auth", auth_routes)
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        todos::list_todos,
        todos::create_todo,
        todos::toggle_todo,
        todos::delete_todo,
        auth::ok,
        auth::get_session,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            Todo,
            CreateTodoRequest,
            ToggleTodoRequest,
            Session,
            EnvironmentLabel,
            NodeEnv,
            auth::AuthOkResponse,
            health::HealthResponse,
            health::ReadyResponse,
            health::HealthChecks
        )
    ),
    tags(
        (name = "Todos", description = "Todo management"),
        (name = "Auth", description = "Session status"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;
