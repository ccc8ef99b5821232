//! Token issuance and verification across the two token classes

mod common;

use common::{test_auth_config, test_identity};
use streamhub_auth::{
    issue_access_token, issue_refresh_token, verify_access_token, verify_refresh_token, AuthError,
};

#[tokio::test]
async fn test_access_token_carries_identity_snapshot() {
    let config = test_auth_config();
    let identity = test_identity();

    let token = issue_access_token(&config, &identity).unwrap();
    let claims = verify_access_token(&config, &token).unwrap();

    assert_eq!(claims.sub, identity.id);
    assert_eq!(claims.username, identity.username);
    assert_eq!(claims.email, identity.email);
    assert_eq!(claims.full_name, identity.full_name);
    assert!(claims.exp > claims.iat);
    assert_eq!(claims.exp - claims.iat, config.access_ttl_secs);
}

#[tokio::test]
async fn test_refresh_token_roundtrip() {
    let config = test_auth_config();
    let identity = test_identity();

    let token = issue_refresh_token(&config, identity.id).unwrap();
    let claims = verify_refresh_token(&config, &token).unwrap();

    assert_eq!(claims.sub, identity.id);
    assert_eq!(claims.exp - claims.iat, config.refresh_ttl_secs);
}

#[tokio::test]
async fn test_token_classes_do_not_cross_verify() {
    let config = test_auth_config();
    let identity = test_identity();

    let access = issue_access_token(&config, &identity).unwrap();
    let refresh = issue_refresh_token(&config, identity.id).unwrap();

    assert!(matches!(
        verify_refresh_token(&config, &access),
        Err(AuthError::InvalidToken)
    ));
    assert!(matches!(
        verify_access_token(&config, &refresh),
        Err(AuthError::InvalidToken)
    ));
}

#[tokio::test]
async fn test_tampered_token_rejected() {
    let config = test_auth_config();
    let identity = test_identity();

    let token = issue_access_token(&config, &identity).unwrap();
    let mut tampered = token.clone();
    tampered.pop();
    tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

    assert!(matches!(
        verify_access_token(&config, &tampered),
        Err(AuthError::InvalidToken)
    ));
}

#[tokio::test]
async fn test_wrong_secret_rejected() {
    let config = test_auth_config();
    let identity = test_identity();

    let token = issue_access_token(&config, &identity).unwrap();

    let mut other = test_auth_config();
    other.access_secret = "a-different-secret".to_string();

    assert!(matches!(
        verify_access_token(&other, &token),
        Err(AuthError::InvalidToken)
    ));
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let config = test_auth_config();

    assert!(matches!(
        verify_access_token(&config, "not.a.jwt"),
        Err(AuthError::InvalidToken)
    ));
    assert!(matches!(
        verify_refresh_token(&config, ""),
        Err(AuthError::InvalidToken)
    ));
}
