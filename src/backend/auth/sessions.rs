/**
 * Session Tokens
 *
 * This module handles JWT issuance and verification. Tokens are HS256,
 * carry `{id, email, isAdmin, iat, exp}` and expire one hour after
 * issuance. No server-side session state exists; a token is valid until
 * its `exp` regardless of logout.
 *
 * Verification takes the current time as an argument and checks `exp`
 * against it with zero leeway, so it is a pure function of
 * (token, secret, now).
 */

use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::backend::store::User;

/// Token lifetime in seconds
pub const TOKEN_TTL_SECS: u64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    pub id: String,
    /// Email
    pub email: String,
    /// Admin flag
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Token failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    /// Signature, encoding or claim shape is wrong
    #[error("invalid token: {0}")]
    Invalid(String),
    #[error("system clock is before the Unix epoch")]
    Clock,
    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Current Unix time in seconds
pub fn now_secs() -> Result<u64, TokenError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|_| TokenError::Clock)
}

/// Signing and verification keys derived from one shared secret
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, TOKEN_TTL_SECS)
    }

    pub fn with_ttl(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Issue a token for `user` at the current time
    pub fn issue(&self, user: &User) -> Result<(String, Claims), TokenError> {
        self.issue_at(user, now_secs()?)
    }

    /// Issue a token for `user` as if the current time were `now`
    pub fn issue_at(&self, user: &User, now: u64) -> Result<(String, Claims), TokenError> {
        let claims = Claims {
            id: user.id.to_string(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            iat: now,
            exp: now + self.ttl_secs,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))?;

        Ok((token, claims))
    }

    /// Verify a token at the current time
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, now_secs()?)
    }

    /// Verify signature and claims, then check expiry against `now`
    pub fn verify_at(&self, token: &str, now: u64) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })?
            .claims;

        if claims.exp <= now {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
