//! Axum extractor for authenticated requests
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::AuthBackend;
use crate::context::AuthContext;
use crate::cookies::ACCESS_COOKIE;
use crate::error::AuthError;
use crate::jwt::extract_bearer_token;

/// Authenticated user extractor.
///
/// Reads the access token from the `accessToken` cookie, falling back to
/// `Authorization: Bearer`. Requests without a verifiable token are rejected
/// with 401 before any handler code runs.
#[derive(Debug)]
pub struct AuthUser(pub AuthContext);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);

        let jar = CookieJar::from_headers(&parts.headers);
        let token = match jar.get(ACCESS_COOKIE) {
            Some(cookie) => cookie.value().to_string(),
            None => {
                let auth_header = parts
                    .headers
                    .get(AUTHORIZATION)
                    .ok_or(AuthError::MissingCredentials)?;
                extract_bearer_token(auth_header)?
            }
        };

        let auth_context = backend.authenticate(&token).await?;

        Ok(AuthUser(auth_context))
    }
}
