//! Authentication flow handlers
//!
//! Registration, login, token refresh, logout, and password change.
//! Login and refresh set the `accessToken`/`refreshToken` cookie pair and
//! also return both tokens in the body for header-based clients.

use axum::{extract::State, http::StatusCode, response::Json};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use streamhub_auth::{
    access_cookie, clear_access_cookie, clear_refresh_cookie, hash_password, issue_access_token,
    issue_refresh_token, refresh_cookie, verify_password, verify_refresh_token, AuthIdentity,
    AuthUser, REFRESH_COOKIE,
};
use streamhub_common::{Error, ValidatedJson};

use crate::api::middleware::UsersState;
use crate::repository::NewUser;

/// Length checks run against the trimmed value; `register` trims before
/// persisting, so surrounding whitespace must not count toward the minimum.
fn validate_username(value: &str) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if !(3..=30).contains(&len) {
        return Err(ValidationError::new("length"));
    }
    Ok(())
}

fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if !(1..=255).contains(&len) {
        return Err(ValidationError::new("length"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = validate_username))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    #[validate(custom(function = validate_full_name))]
    pub full_name: String,

    /// Opaque asset-host references; uploads go through the account endpoints
    #[validate(url)]
    pub avatar_url: Option<String>,

    #[validate(url)]
    pub cover_image_url: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub email: Option<String>,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: AuthIdentity,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1))]
    pub old_password: String,

    #[validate(length(min = 8, max = 128))]
    pub new_password: String,
}

/// POST /v1/auth/register
pub async fn register(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthIdentity>), Error> {
    let username = request.username.trim().to_lowercase();
    let email = request.email.trim().to_lowercase();

    // Checked before insert; the unique indexes backstop concurrent registrations.
    if state.repos.users.exists(&username, &email).await? {
        return Err(Error::Conflict(
            "User with this username or email already exists".to_string(),
        ));
    }

    let password_hash = hash_password(&request.password)?;

    let user = state
        .repos
        .users
        .create(NewUser {
            username: username.clone(),
            email,
            full_name: request.full_name.trim().to_string(),
            password_hash,
            avatar_url: request.avatar_url,
            cover_image_url: request.cover_image_url,
        })
        .await?;

    tracing::info!(user_id = %user.id, username = %username, "User registered");

    Ok((StatusCode::CREATED, Json(user.to_identity())))
}

/// POST /v1/auth/login
pub async fn login(
    State(state): State<UsersState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), Error> {
    let identifier = request
        .username
        .as_deref()
        .or(request.email.as_deref())
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::Validation("username or email is required".to_string()))?;

    let user = state
        .repos
        .users
        .find_by_login(&identifier)
        .await?
        .ok_or_else(|| Error::NotFound("User does not exist".to_string()))?;

    if !verify_password(&request.password, &user.password_hash) {
        return Err(Error::Unauthorized("Password does not match".to_string()));
    }

    let config = state.auth.config();
    let identity = user.to_identity();
    let access_token = issue_access_token(config, &identity)?;
    let refresh_token = issue_refresh_token(config, user.id)?;

    // Overwrites any prior refresh token, invalidating it immediately.
    state
        .repos
        .users
        .store_refresh_token(user.id, &refresh_token)
        .await?;

    tracing::info!(user_id = %user.id, "User logged in");

    let jar = jar
        .add(access_cookie(&access_token, config.access_ttl_secs))
        .add(refresh_cookie(&refresh_token, config.refresh_ttl_secs));

    Ok((
        jar,
        Json(LoginResponse {
            user: identity,
            access_token,
            refresh_token,
        }),
    ))
}

/// POST /v1/auth/refresh
///
/// Token rotation: verifies the presented refresh token, then replaces the
/// stored value with a fresh token in one conditional update. Presenting a
/// superseded token fails with 401 — there is no way to reuse it.
pub async fn refresh(
    State(state): State<UsersState>,
    jar: CookieJar,
    body: Option<Json<RefreshRequest>>,
) -> Result<(CookieJar, Json<RefreshResponse>), Error> {
    let presented = jar
        .get(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .or_else(|| body.and_then(|Json(b)| b.refresh_token))
        .ok_or_else(|| Error::Unauthorized("Refresh token required".to_string()))?;

    let config = state.auth.config();
    let claims = verify_refresh_token(config, &presented)?;

    let user = state
        .repos
        .users
        .get_by_id(claims.sub)
        .await?
        .ok_or_else(|| Error::Unauthorized("User not found".to_string()))?;

    let replacement = issue_refresh_token(config, user.id)?;
    let rotated = state
        .repos
        .users
        .rotate_refresh_token(user.id, &presented, &replacement)
        .await?;

    if !rotated {
        // Stored value differs: the token was already used, superseded by a
        // newer login, or revoked by logout. Fail closed.
        tracing::warn!(user_id = %user.id, "Refresh token reuse rejected");
        return Err(Error::Unauthorized(
            "Refresh token is expired or already used".to_string(),
        ));
    }

    let access_token = issue_access_token(config, &user.to_identity())?;

    let jar = jar
        .add(access_cookie(&access_token, config.access_ttl_secs))
        .add(refresh_cookie(&replacement, config.refresh_ttl_secs));

    Ok((
        jar,
        Json(RefreshResponse {
            access_token,
            refresh_token: replacement,
        }),
    ))
}

/// POST /v1/auth/logout
pub async fn logout(
    AuthUser(ctx): AuthUser,
    State(state): State<UsersState>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode), Error> {
    state
        .repos
        .users
        .clear_refresh_token(ctx.user_id())
        .await?;

    tracing::info!(user_id = %ctx.user_id(), "User logged out");

    let jar = jar.add(clear_access_cookie()).add(clear_refresh_cookie());

    Ok((jar, StatusCode::NO_CONTENT))
}

/// POST /v1/auth/change-password
pub async fn change_password(
    AuthUser(ctx): AuthUser,
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> Result<StatusCode, Error> {
    let user = state
        .repos
        .users
        .get_by_id(ctx.user_id())
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    if !verify_password(&request.old_password, &user.password_hash) {
        return Err(Error::Unauthorized(
            "Old password is incorrect".to_string(),
        ));
    }

    let password_hash = hash_password(&request.new_password)?;
    state
        .repos
        .users
        .update_password_hash(user.id, &password_hash)
        .await?;

    tracing::info!(user_id = %user.id, "Password changed");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request(username: &str, full_name: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: "user@example.com".to_string(),
            password: "password123".to_string(),
            full_name: full_name.to_string(),
            avatar_url: None,
            cover_image_url: None,
        }
    }

    #[test]
    fn whitespace_only_username_is_rejected() {
        let request = register_request("   ", "Jane Doe");
        assert!(request.validate().is_err());
    }

    #[test]
    fn whitespace_only_full_name_is_rejected() {
        let request = register_request("janedoe", " ");
        assert!(request.validate().is_err());
    }

    #[test]
    fn padded_username_counts_trimmed_length() {
        // Trims to a single character, under the minimum of three.
        let request = register_request("  a  ", "Jane Doe");
        assert!(request.validate().is_err());
    }

    #[test]
    fn padded_but_valid_fields_pass() {
        let request = register_request("  janedoe  ", "  Jane Doe  ");
        assert!(request.validate().is_ok());
    }
}
