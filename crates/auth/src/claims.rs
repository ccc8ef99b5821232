//! Token claims types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in an access token.
///
/// Carries a stable snapshot of the identity's display fields so request
/// handling never needs a store lookup just to render who the caller is.
/// Validity is fully determined by signature and expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

/// Claims embedded in a refresh token.
///
/// Carries only the user id. A refresh token is valid only while its exact
/// compact form matches the value stored on the user record, so rotation and
/// logout revoke it immediately regardless of `exp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (user ID)
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}
