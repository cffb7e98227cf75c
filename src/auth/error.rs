// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session verification errors.

/// Why a session cookie was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Cookie value is not `<payload>.<signature>` or does not decode
    #[error("Session cookie is malformed")]
    MalformedSession,
    /// Signature does not match the payload
    #[error("Session signature is invalid")]
    InvalidSignature,
    /// Session is past its expiry time
    #[error("Session has expired")]
    SessionExpired,
    /// Internal error
    #[error("Internal authentication error: {0}")]
    InternalError(String),
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MalformedSession => "malformed_session",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::SessionExpired => "session_expired",
            AuthError::InternalError(_) => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(AuthError::MalformedSession.error_code(), "malformed_session");
        assert_eq!(AuthError::InvalidSignature.error_code(), "invalid_signature");
        assert_eq!(AuthError::SessionExpired.error_code(), "session_expired");
        assert_eq!(
            AuthError::InternalError("x".into()).to_string(),
            "Internal authentication error: x"
        );
    }
}
