//! Shared helpers for integration tests
#![allow(dead_code)]

use axum::http::{header::AUTHORIZATION, request::Parts, Request};
use chrono::Utc;
use streamhub_auth::{AuthConfig, AuthIdentity};
use uuid::Uuid;

/// Fixed auth config so token tests never depend on the environment.
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        access_secret: "integration-access-secret".to_string(),
        refresh_secret: "integration-refresh-secret".to_string(),
        access_ttl_secs: 900,
        refresh_ttl_secs: 864_000,
    }
}

pub fn test_identity() -> AuthIdentity {
    let now = Utc::now();
    AuthIdentity {
        id: Uuid::new_v4(),
        username: "testuser".to_string(),
        email: "testuser@example.com".to_string(),
        full_name: "Test User".to_string(),
        avatar_url: None,
        cover_image_url: None,
        created_at: now,
        updated_at: now,
    }
}

/// Create `Parts` from an HTTP request with optional authorization header.
pub fn make_parts(auth_header: Option<&str>) -> Parts {
    let mut builder = Request::builder();
    if let Some(value) = auth_header {
        builder = builder.header(AUTHORIZATION, value);
    }
    let (parts, _) = builder.body(()).unwrap().into_parts();
    parts
}

/// Create `Parts` carrying an `accessToken` cookie.
pub fn make_parts_with_cookie(token: &str) -> Parts {
    let (parts, _) = Request::builder()
        .header("cookie", format!("accessToken={}", token))
        .body(())
        .unwrap()
        .into_parts();
    parts
}
