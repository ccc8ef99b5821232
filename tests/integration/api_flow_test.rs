//! End-to-end auth flow against a real database
//!
//! These run against the database in `DATABASE_URL` and are ignored by
//! default. Run them with `cargo test -- --ignored` once Postgres is up
//! and the migrations have been applied.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

async fn test_app() -> anyhow::Result<Router> {
    dotenvy::dotenv().ok();

    if std::env::var("ACCESS_TOKEN_SECRET").is_err() {
        std::env::set_var("ACCESS_TOKEN_SECRET", "e2e-access-secret");
    }
    if std::env::var("REFRESH_TOKEN_SECRET").is_err() {
        std::env::set_var("REFRESH_TOKEN_SECRET", "e2e-refresh-secret");
    }

    let config = streamhub_common::Config::from_env()?;
    let pool = sqlx::PgPool::connect(&config.database_url).await?;
    streamhub_app::create_app(config, pool).await
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn unique_credentials() -> (String, String) {
    let tag = Uuid::new_v4().simple().to_string();
    (format!("user{}", &tag[..12]), format!("user{}@example.com", &tag[..12]))
}

fn post_json_auth(uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Registers a fresh user and returns its username and access token.
async fn register_and_login(app: &Router, password: &str) -> (String, String) {
    let (username, email) = unique_credentials();

    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/auth/register",
            json!({
                "username": username,
                "email": email,
                "password": password,
                "full_name": "Flow Test",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/auth/login",
            json!({ "username": username, "password": password }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let access_token = body["accessToken"].as_str().unwrap().to_string();
    (username, access_token)
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_login_refresh_flow() {
    let app = test_app().await.unwrap();
    let (username, email) = unique_credentials();

    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/auth/register",
            json!({
                "username": username,
                "email": email,
                "password": "hunter2hunter2",
                "full_name": "Flow Test",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/auth/login",
            json!({ "username": username, "password": "hunter2hunter2" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let refresh_token = body["refreshToken"].as_str().unwrap().to_string();
    assert!(body["accessToken"].as_str().is_some());
    assert!(body["user"].get("password_hash").is_none());
    assert!(body["user"].get("refresh_token").is_none());

    // First refresh rotates the stored token
    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/auth/refresh",
            json!({ "refreshToken": refresh_token }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let rotated = response_json(response).await;
    assert_ne!(rotated["refreshToken"].as_str().unwrap(), refresh_token);

    // Replaying the consumed token must fail
    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/auth/refresh",
            json!({ "refreshToken": refresh_token }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_wrong_password_rejected() {
    let app = test_app().await.unwrap();
    let (username, email) = unique_credentials();

    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/auth/register",
            json!({
                "username": username,
                "email": email,
                "password": "hunter2hunter2",
                "full_name": "Flow Test",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(post_json(
            "/v1/auth/login",
            json!({ "username": username, "password": "wrong-password" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_duplicate_registration_conflicts() {
    let app = test_app().await.unwrap();
    let (username, email) = unique_credentials();

    let payload = json!({
        "username": username,
        "email": email,
        "password": "hunter2hunter2",
        "full_name": "Flow Test",
    });

    let response = app
        .clone()
        .oneshot(post_json("/v1/auth/register", payload.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(post_json("/v1/auth/register", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_logout_invalidates_refresh_token() {
    let app = test_app().await.unwrap();
    let (username, email) = unique_credentials();

    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/auth/register",
            json!({
                "username": username,
                "email": email,
                "password": "hunter2hunter2",
                "full_name": "Flow Test",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/auth/login",
            json!({ "username": username, "password": "hunter2hunter2" }),
        ))
        .await
        .unwrap();
    let body = response_json(response).await;
    let access_token = body["accessToken"].as_str().unwrap().to_string();
    let refresh_token = body["refreshToken"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/auth/logout")
                .header("authorization", format!("Bearer {}", access_token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The refresh token issued before logout is dead
    let response = app
        .oneshot(post_json(
            "/v1/auth/refresh",
            json!({ "refreshToken": refresh_token }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_change_password_rotates_credentials() {
    let app = test_app().await.unwrap();
    let (username, access_token) = register_and_login(&app, "hunter2hunter2").await;

    // Wrong old password is rejected and the stored hash stays in place
    let response = app
        .clone()
        .oneshot(post_json_auth(
            "/v1/auth/change-password",
            &access_token,
            json!({ "old_password": "not-the-password", "new_password": "correcthorse99" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/auth/login",
            json!({ "username": username, "password": "hunter2hunter2" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Correct old password swaps the hash
    let response = app
        .clone()
        .oneshot(post_json_auth(
            "/v1/auth/change-password",
            &access_token,
            json!({ "old_password": "hunter2hunter2", "new_password": "correcthorse99" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(post_json(
            "/v1/auth/login",
            json!({ "username": username, "password": "correcthorse99" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(post_json(
            "/v1/auth/login",
            json!({ "username": username, "password": "hunter2hunter2" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_mutations_forbidden_for_non_owner() {
    let app = test_app().await.unwrap();
    let (_, owner_token) = register_and_login(&app, "hunter2hunter2").await;
    let (_, other_token) = register_and_login(&app, "hunter2hunter2").await;

    let response = app
        .clone()
        .oneshot(post_json_auth(
            "/v1/tweets",
            &owner_token,
            json!({ "content": "first post" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let tweet = response_json(response).await;
    let tweet_id = tweet["id"].as_str().unwrap().to_string();

    // Another authenticated user may neither edit nor delete it
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/v1/tweets/{}", tweet_id))
                .header("content-type", "application/json")
                .header("authorization", format!("Bearer {}", other_token))
                .body(Body::from(json!({ "content": "hijacked" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/v1/tweets/{}", tweet_id))
                .header("authorization", format!("Bearer {}", other_token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The owner still can
    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/v1/tweets/{}", tweet_id))
                .header("content-type", "application/json")
                .header("authorization", format!("Bearer {}", owner_token))
                .body(Body::from(json!({ "content": "still mine" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_resource_routes_require_auth() {
    let app = test_app().await.unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/videos")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
