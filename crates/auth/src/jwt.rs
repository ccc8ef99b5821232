//! Token issuance and verification
//!
//! Two token classes, each signed HS256 with its own secret:
//! - access tokens embed an identity display snapshot and expire on a
//!   minutes scale; verification is stateless.
//! - refresh tokens embed only the user id and expire on a days scale;
//!   callers must additionally compare the compact form against the value
//!   stored on the user record.

use axum::http::HeaderValue;
use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use uuid::Uuid;

use crate::claims::{AccessClaims, RefreshClaims};
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::types::AuthIdentity;

/// Issue a signed access token for `identity`.
///
/// Pure function of identity + secret + TTL; deterministic given the same
/// issued-at instant.
pub fn issue_access_token(config: &AuthConfig, identity: &AuthIdentity) -> Result<String, AuthError> {
    let iat = Utc::now().timestamp();
    let claims = AccessClaims {
        sub: identity.id,
        username: identity.username.clone(),
        email: identity.email.clone(),
        full_name: identity.full_name.clone(),
        iat,
        exp: iat + config.access_ttl_secs,
    };
    sign(&claims, &config.access_secret)
}

/// Issue a signed refresh token for `user_id`.
///
/// No side effects; persisting the token onto the user record is the
/// caller's responsibility.
pub fn issue_refresh_token(config: &AuthConfig, user_id: Uuid) -> Result<String, AuthError> {
    let iat = Utc::now().timestamp();
    let claims = RefreshClaims {
        sub: user_id,
        iat,
        exp: iat + config.refresh_ttl_secs,
    };
    sign(&claims, &config.refresh_secret)
}

/// Verify an access token's signature and expiry.
pub fn verify_access_token(config: &AuthConfig, token: &str) -> Result<AccessClaims, AuthError> {
    verify(token, &config.access_secret)
}

/// Verify a refresh token's signature and expiry.
///
/// This is only half of refresh-token validity; the stored-value comparison
/// happens in the authentication flow.
pub fn verify_refresh_token(config: &AuthConfig, token: &str) -> Result<RefreshClaims, AuthError> {
    verify(token, &config.refresh_secret)
}

fn sign<T: serde::Serialize>(claims: &T, secret: &str) -> Result<String, AuthError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&header, claims, &key).map_err(|e| {
        tracing::error!(error = %e, "Token signing failed");
        AuthError::TokenCreation
    })
}

fn verify<T: serde::de::DeserializeOwned>(token: &str, secret: &str) -> Result<T, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    validation.leeway = 0;

    let key = DecodingKey::from_secret(secret.as_ref());

    let data = decode::<T>(token, &key, &validation).map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => {
            tracing::debug!(error = %e, "Token verification failed");
            AuthError::InvalidToken
        }
    })?;

    Ok(data.claims)
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    if let Some(token) = header_str.strip_prefix("Bearer ") {
        Ok(token.to_string())
    } else {
        Err(AuthError::InvalidAuthorizationFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chrono::Utc;

    fn test_identity() -> AuthIdentity {
        AuthIdentity {
            id: Uuid::new_v4(),
            username: "ana".to_string(),
            email: "a@x.com".to_string(),
            full_name: "Ana".to_string(),
            avatar_url: None,
            cover_image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_access_token_roundtrip() {
        let config = AuthConfig::for_tests();
        let identity = test_identity();

        let token = issue_access_token(&config, &identity).unwrap();
        let claims = verify_access_token(&config, &token).unwrap();

        assert_eq!(claims.sub, identity.id);
        assert_eq!(claims.username, "ana");
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.full_name, "Ana");
        assert_eq!(claims.exp - claims.iat, config.access_ttl_secs);
    }

    #[test]
    fn test_refresh_token_roundtrip_carries_only_id() {
        let config = AuthConfig::for_tests();
        let user_id = Uuid::new_v4();

        let token = issue_refresh_token(&config, user_id).unwrap();
        let claims = verify_refresh_token(&config, &token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp - claims.iat, config.refresh_ttl_secs);
    }

    #[test]
    fn test_token_classes_are_not_interchangeable() {
        let config = AuthConfig::for_tests();
        let identity = test_identity();

        // An access token does not verify against the refresh secret.
        let access = issue_access_token(&config, &identity).unwrap();
        assert!(matches!(
            verify_refresh_token(&config, &access),
            Err(AuthError::InvalidToken)
        ));

        // A refresh token does not verify as an access token.
        let refresh = issue_refresh_token(&config, identity.id).unwrap();
        assert!(matches!(
            verify_access_token(&config, &refresh),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let config = AuthConfig::for_tests();
        let token = issue_access_token(&config, &test_identity()).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

        assert!(matches!(
            verify_access_token(&config, &tampered),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_is_rejected_as_expired() {
        let config = AuthConfig::for_tests();
        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: Uuid::new_v4(),
            username: "ana".to_string(),
            email: "a@x.com".to_string(),
            full_name: "Ana".to_string(),
            iat: now - 120,
            exp: now - 60,
        };
        let token = sign(&claims, &config.access_secret).unwrap();

        assert!(matches!(
            verify_access_token(&config, &token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let config = AuthConfig::for_tests();
        assert!(matches!(
            verify_access_token(&config, "not-a-token"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let header = HeaderValue::from_static("Bearer abc123");
        assert_eq!(extract_bearer_token(&header).unwrap(), "abc123");

        let header = HeaderValue::from_static("abc123");
        assert!(extract_bearer_token(&header).is_err());

        let header = HeaderValue::from_static("Basic abc123");
        assert!(extract_bearer_token(&header).is_err());
    }
}
