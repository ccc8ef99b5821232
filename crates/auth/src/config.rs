//! Authentication configuration
//!
//! Two distinct signing secrets and two distinct TTLs: the access token is
//! short-lived and verified statelessly on every request; the refresh token
//! is long-lived and additionally checked against the value stored on the
//! user record, which is what makes revocation possible.

use anyhow::Result;
use std::env;

/// Default access-token lifetime: 15 minutes
const DEFAULT_ACCESS_TTL_SECS: i64 = 900;

/// Default refresh-token lifetime: 10 days
const DEFAULT_REFRESH_TTL_SECS: i64 = 864_000;

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl_secs: i64,
    pub refresh_ttl_secs: i64,
}

impl AuthConfig {
    /// Load authentication configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            access_secret: env::var("ACCESS_TOKEN_SECRET")
                .map_err(|_| anyhow::anyhow!("ACCESS_TOKEN_SECRET is required"))?,
            refresh_secret: env::var("REFRESH_TOKEN_SECRET")
                .map_err(|_| anyhow::anyhow!("REFRESH_TOKEN_SECRET is required"))?,
            access_ttl_secs: env::var("ACCESS_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ACCESS_TTL_SECS),
            refresh_ttl_secs: env::var("REFRESH_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REFRESH_TTL_SECS),
        })
    }
}

#[cfg(test)]
impl AuthConfig {
    /// Fixed config for unit tests
    pub fn for_tests() -> Self {
        Self {
            access_secret: "access-test-secret".to_string(),
            refresh_secret: "refresh-test-secret".to_string(),
            access_ttl_secs: DEFAULT_ACCESS_TTL_SECS,
            refresh_ttl_secs: DEFAULT_REFRESH_TTL_SECS,
        }
    }
}
