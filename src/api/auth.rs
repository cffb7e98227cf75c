// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Auth status endpoints.

use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::{cookie::cookie_value, Session, SESSION_COOKIE};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthOkResponse {
    pub ok: bool,
}

#[utoipa::path(
    get,
    path = "/api/auth/ok",
    tag = "Auth",
    responses((status = 200, body = AuthOkResponse))
)]
pub async fn ok() -> Json<AuthOkResponse> {
    Json(AuthOkResponse { ok: true })
}

/// Current session from the session cookie, or `null`.
///
/// Missing, tampered and expired cookies all yield `null`.
#[utoipa::path(
    get,
    path = "/api/auth/get-session",
    tag = "Auth",
    responses((status = 200, description = "The current session, or null", body = Session))
)]
pub async fn get_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<Option<Session>> {
    let Some(value) = cookie_value(&headers, SESSION_COOKIE) else {
        return Json(None);
    };

    match state.auth.signer().verify(value) {
        Ok(session) => Json(Some(session)),
        Err(e) => {
            tracing::debug!(error_code = e.error_code(), "Rejected session cookie");
            Json(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::testing::app_config;
    use axum::http::{header::COOKIE, HeaderValue};
    use chrono::Duration;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[tokio::test]
    async fn ok_reports_true() {
        let Json(body) = ok().await;
        assert!(body.ok);
    }

    #[tokio::test]
    async fn get_session_returns_verified_session() {
        let state = AppState::in_memory(app_config());
        let session = Session::new("user-1", Duration::days(1));
        let value = state.auth.signer().sign(&session).unwrap();

        let Json(found) = get_session(
            State(state),
            headers_with_cookie(&format!("{SESSION_COOKIE}={value}")),
        )
        .await;

        assert_eq!(found, Some(session));
    }

    #[tokio::test]
    async fn get_session_without_cookie_is_null() {
        let state = AppState::in_memory(app_config());
        let Json(found) = get_session(State(state), HeaderMap::new()).await;
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn get_session_with_forged_cookie_is_null() {
        let state = AppState::in_memory(app_config());
        let forged = crate::auth::SessionSigner::new(b"not-the-auth-secret")
            .sign(&Session::new("user-1", Duration::days(1)))
            .unwrap();

        let Json(found) = get_session(
            State(state),
            headers_with_cookie(&format!("{SESSION_COOKIE}={forged}")),
        )
        .await;

        assert_eq!(found, None);
    }
}
