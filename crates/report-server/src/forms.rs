//! Signed, time-limited tokens for the report submission form.
//!
//! A token has the shape `{issued_unix}.{nonce}.{mac}` where `mac` is a keyed
//! BLAKE3 hash of `{issued_unix}.{nonce}` under a key derived from the
//! configured secret. Tokens are stateless: verification only needs the key.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// Name of the hidden form field carrying the token.
pub const TOKEN_FIELD: &str = "csrf_token";

const KEY_CONTEXT: &str = "report-server 2024-01-01 form token signing key";

/// Reasons a submitted token is rejected. Messages are shown on the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("The CSRF token is missing.")]
    Missing,
    #[error("The CSRF token is invalid.")]
    Invalid,
    #[error("The CSRF token has expired.")]
    Expired,
}

/// Issues and verifies form tokens.
pub struct FormTokens {
    key: [u8; 32],
    time_limit: Duration,
}

impl FormTokens {
    pub fn new(secret: &str, time_limit: Duration) -> Self {
        FormTokens {
            key: blake3::derive_key(KEY_CONTEXT, secret.as_bytes()),
            time_limit,
        }
    }

    /// Uses a random per-process secret.
    pub fn random(time_limit: Duration) -> Self {
        let secret = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
        Self::new(&secret, time_limit)
    }

    pub fn issue(&self) -> String {
        self.issue_at(now_unix())
    }

    pub fn verify(&self, token: &str) -> Result<(), TokenError> {
        self.verify_at(token, now_unix())
    }

    fn issue_at(&self, issued: u64) -> String {
        let payload = format!("{}.{}", issued, Uuid::new_v4().simple());
        let mac = self.sign(&payload);
        format!("{}.{}", payload, mac.to_hex())
    }

    fn verify_at(&self, token: &str, now: u64) -> Result<(), TokenError> {
        if token.is_empty() {
            return Err(TokenError::Missing);
        }
        let (payload, mac_hex) = token.rsplit_once('.').ok_or(TokenError::Invalid)?;
        let (issued, _nonce) = payload.split_once('.').ok_or(TokenError::Invalid)?;
        let issued: u64 = issued.parse().map_err(|_| TokenError::Invalid)?;
        let mac = blake3::Hash::from_hex(mac_hex).map_err(|_| TokenError::Invalid)?;

        // blake3::Hash equality is constant-time.
        if self.sign(payload) != mac || issued > now {
            return Err(TokenError::Invalid);
        }
        if now - issued > self.time_limit.as_secs() {
            return Err(TokenError::Expired);
        }
        Ok(())
    }

    fn sign(&self, payload: &str) -> blake3::Hash {
        blake3::keyed_hash(&self.key, payload.as_bytes())
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
