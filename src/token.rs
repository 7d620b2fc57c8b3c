//! Token issuance and verification
//!
//! HS256 bearer tokens for VisionBoard Pro sessions. The signing key is
//! mandatory configuration: construction fails on an empty key or on the
//! documented development placeholder, so a deployment can never silently
//! sign with a known key.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default token lifetime
pub const DEFAULT_TOKEN_LIFETIME_DAYS: i64 = 7;

/// Development placeholder key, rejected at construction
pub const PLACEHOLDER_SIGNING_KEY: &str = "visionboard-dev-secret";

/// Failure of token issuance or verification
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("signing key is not configured")]
    EmptyKey,

    #[error("signing key is the development placeholder and must be overridden")]
    PlaceholderKey,

    #[error("token lifetime must be positive")]
    InvalidLifetime,

    #[error("subject id must not be empty")]
    EmptySubject,

    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// Signature mismatch, expiry, or malformed token. Collapsed into one
    /// variant so callers cannot distinguish why verification failed.
    #[error("invalid token")]
    InvalidToken,
}

/// Registered claims carried by a session token
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Issues and verifies HS256 session tokens
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime_days: i64,
}

impl TokenIssuer {
    /// Create an issuer with an explicit lifetime in days
    pub fn new(signing_key: &str, lifetime_days: i64) -> Result<Self, TokenError> {
        if signing_key.trim().is_empty() {
            return Err(TokenError::EmptyKey);
        }
        if signing_key == PLACEHOLDER_SIGNING_KEY {
            return Err(TokenError::PlaceholderKey);
        }
        if lifetime_days <= 0 {
            return Err(TokenError::InvalidLifetime);
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(signing_key.as_bytes()),
            decoding: DecodingKey::from_secret(signing_key.as_bytes()),
            lifetime_days,
        })
    }

    /// Create an issuer with the default 7-day lifetime
    pub fn with_default_lifetime(signing_key: &str) -> Result<Self, TokenError> {
        Self::new(signing_key, DEFAULT_TOKEN_LIFETIME_DAYS)
    }

    /// Issue a signed token for the given subject
    pub fn issue(&self, subject_id: &str) -> Result<String, TokenError> {
        if subject_id.trim().is_empty() {
            return Err(TokenError::EmptySubject);
        }

        let now = Utc::now();
        let claims = Claims {
            sub: subject_id.to_string(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::days(self.lifetime_days)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::Signing)
    }

    /// Verify a token and return its subject
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map_err(|_| TokenError::InvalidToken)?;
        Ok(data.claims.sub)
    }
}
