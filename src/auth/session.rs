// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signed session cookie values.
//!
//! Format: `base64url(json(session)) "." base64url(hmac_sha256(secret, payload))`
//! where the MAC covers the encoded payload string.

use base64ct::{Base64UrlUnpadded, Encoding};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use utoipa::ToSchema;
use uuid::Uuid;

use super::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// An authenticated browser session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Session {
    /// Random session identifier.
    pub id: String,
    /// Identifier of the signed-in user.
    pub user_id: String,
    /// When the session stops being valid.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, ttl: Duration) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            expires_at: Utc::now() + ttl,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Signs and verifies session cookie values with `AUTH_SECRET`.
#[derive(Clone)]
pub struct SessionSigner {
    key: Vec<u8>,
}

impl SessionSigner {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: secret.to_vec(),
        }
    }

    fn mac(&self) -> Result<HmacSha256, AuthError> {
        HmacSha256::new_from_slice(&self.key).map_err(|e| AuthError::InternalError(e.to_string()))
    }

    pub fn sign(&self, session: &Session) -> Result<String, AuthError> {
        let json =
            serde_json::to_vec(session).map_err(|e| AuthError::InternalError(e.to_string()))?;
        let payload = Base64UrlUnpadded::encode_string(&json);

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let signature = Base64UrlUnpadded::encode_string(&mac.finalize().into_bytes());

        Ok(format!("{payload}.{signature}"))
    }

    /// Verify a cookie value and return the session if it is still valid.
    pub fn verify(&self, value: &str) -> Result<Session, AuthError> {
        self.verify_at(value, Utc::now())
    }

    pub fn verify_at(&self, value: &str, now: DateTime<Utc>) -> Result<Session, AuthError> {
        let (payload, signature) = value.split_once('.').ok_or(AuthError::MalformedSession)?;
        let signature =
            Base64UrlUnpadded::decode_vec(signature).map_err(|_| AuthError::MalformedSession)?;

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::InvalidSignature)?;

        let json = Base64UrlUnpadded::decode_vec(payload).map_err(|_| AuthError::MalformedSession)?;
        let session: Session =
            serde_json::from_slice(&json).map_err(|_| AuthError::MalformedSession)?;

        if session.is_expired_at(now) {
            return Err(AuthError::SessionExpired);
        }

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_session_verifies_with_same_secret() {
        let signer = SessionSigner::new(b"secret-a");
        let session = Session::new("user-1", Duration::hours(1));

        let value = signer.sign(&session).unwrap();

        assert_eq!(signer.verify(&value).unwrap(), session);
    }

    #[test]
    fn other_secret_rejects_signature() {
        let session = Session::new("user-1", Duration::hours(1));
        let value = SessionSigner::new(b"secret-a").sign(&session).unwrap();

        assert_eq!(
            SessionSigner::new(b"secret-b").verify(&value),
            Err(AuthError::InvalidSignature)
        );
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let signer = SessionSigner::new(b"secret-a");
        let value = signer
            .sign(&Session::new("user-1", Duration::hours(1)))
            .unwrap();
        let (_, signature) = value.split_once('.').unwrap();

        let forged_json = serde_json::to_vec(&Session::new("admin", Duration::hours(1))).unwrap();
        let forged = format!(
            "{}.{signature}",
            Base64UrlUnpadded::encode_string(&forged_json)
        );

        assert_eq!(signer.verify(&forged), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn expired_session_is_rejected() {
        let signer = SessionSigner::new(b"secret-a");
        let session = Session::new("user-1", Duration::minutes(5));
        let value = signer.sign(&session).unwrap();

        let later = session.expires_at + Duration::seconds(1);
        assert_eq!(signer.verify_at(&value, later), Err(AuthError::SessionExpired));
    }

    #[test]
    fn malformed_values_are_rejected() {
        let signer = SessionSigner::new(b"secret-a");
        assert_eq!(signer.verify("no-dot"), Err(AuthError::MalformedSession));
        assert_eq!(signer.verify("abc.!!!"), Err(AuthError::MalformedSession));
    }
}
