// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Settings
//!
//! Session and cross-origin policy derived from the validated configuration.
//!
//! ## Policy
//!
//! - Trusted origins come from `CORS_ORIGIN` (a single origin)
//! - Session cookies are `SameSite=None; Secure; HttpOnly`
//! - Session cookie values are signed with HMAC-SHA256 keyed by `AUTH_SECRET`
//!
//! Sign-up, sign-in and password handling live outside this crate; this
//! module only verifies the session cookies they issue.

pub mod cookie;
pub mod error;
pub mod session;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub use cookie::{CookieAttributes, SameSite};
pub use error::AuthError;
pub use session::{Session, SessionSigner};

use crate::config::AppConfig;

/// Name of the session token cookie.
pub const SESSION_COOKIE: &str = "kfzbuddy.session_token";

/// Authentication settings shared with handlers through `AppState`.
#[derive(Clone)]
pub struct AuthSettings {
    pub trusted_origins: Vec<String>,
    pub cookie: CookieAttributes,
    signer: SessionSigner,
}

impl AuthSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            trusted_origins: vec![config.server.cors_origin.clone().unwrap_or_default()],
            cookie: CookieAttributes::default(),
            signer: SessionSigner::new(config.env.auth_secret.as_bytes()),
        }
    }

    pub fn signer(&self) -> &SessionSigner {
        &self.signer
    }

    /// `Set-Cookie` value carrying a signed session.
    pub fn session_cookie(&self, session: &Session) -> Result<String, AuthError> {
        let value = self.signer.sign(session)?;
        Ok(self.cookie.render(SESSION_COOKIE, &value))
    }

    /// Credentialed CORS restricted to the trusted origins.
    ///
    /// Empty or unparsable origins are skipped, so an unset `CORS_ORIGIN`
    /// allows no cross-origin callers. A `*` cannot be listed alongside
    /// credentials and is skipped as well.
    pub fn cors_layer(&self) -> CorsLayer {
        let origins: Vec<HeaderValue> = self
            .trusted_origins
            .iter()
            .filter(|origin| !origin.is_empty())
            .filter(|origin| {
                let wildcard = origin.trim() == "*";
                if wildcard {
                    tracing::warn!("Ignoring wildcard trusted origin");
                }
                !wildcard
            })
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid trusted origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::testing::app_config;

    #[test]
    fn trusted_origins_come_from_cors_origin() {
        let settings = AuthSettings::from_config(&app_config());
        assert_eq!(settings.trusted_origins, vec!["http://localhost:3001"]);
    }

    #[test]
    fn unset_cors_origin_yields_empty_origin() {
        let mut config = app_config();
        config.server.cors_origin = None;
        let settings = AuthSettings::from_config(&config);
        assert_eq!(settings.trusted_origins, vec![String::new()]);
    }

    #[test]
    fn cors_layer_skips_wildcard_origin() {
        let mut settings = AuthSettings::from_config(&app_config());
        settings.trusted_origins = vec!["*".to_string(), "http://localhost:3001".to_string()];

        // Building the layer must not panic on the wildcard.
        let _layer = settings.cors_layer();
    }

    #[test]
    fn session_cookie_carries_policy_attributes() {
        let settings = AuthSettings::from_config(&app_config());
        let session = Session::new("user-1", chrono::Duration::days(7));

        let cookie = settings.session_cookie(&session).unwrap();

        assert!(cookie.starts_with("kfzbuddy.session_token="));
        assert!(cookie.contains("; SameSite=None"));
        assert!(cookie.contains("; Secure"));
        assert!(cookie.contains("; HttpOnly"));
        assert!(cookie.contains("; Path=/"));
    }
}
