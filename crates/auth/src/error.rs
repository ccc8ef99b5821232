//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    MissingCredentials,
    InvalidAuthorizationFormat,
    InvalidToken,
    TokenExpired,
    UserNotFound,
    UserLoadError,
    TokenCreation,
    PasswordHash,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthError::MissingCredentials => (
                StatusCode::UNAUTHORIZED,
                "MISSING_CREDENTIALS",
                "Access token required (cookie or Authorization header)",
            ),
            AuthError::InvalidAuthorizationFormat => (
                StatusCode::UNAUTHORIZED,
                "INVALID_AUTHORIZATION",
                "Invalid authorization header format",
            ),
            AuthError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "INVALID_TOKEN", "Invalid token")
            }
            AuthError::TokenExpired => {
                (StatusCode::UNAUTHORIZED, "TOKEN_EXPIRED", "Token expired")
            }
            AuthError::UserNotFound => {
                (StatusCode::UNAUTHORIZED, "USER_NOT_FOUND", "User not found")
            }
            AuthError::UserLoadError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "USER_LOAD_ERROR",
                "Failed to load user",
            ),
            AuthError::TokenCreation => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TOKEN_CREATION_ERROR",
                "Failed to issue token",
            ),
            AuthError::PasswordHash => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PASSWORD_HASH_ERROR",
                "Failed to process credentials",
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<AuthError> for streamhub_common::Error {
    fn from(err: AuthError) -> Self {
        use streamhub_common::Error;
        match err {
            AuthError::MissingCredentials => {
                Error::Unauthorized("Access token required".to_string())
            }
            AuthError::InvalidAuthorizationFormat => {
                Error::Unauthorized("Invalid authorization header format".to_string())
            }
            AuthError::InvalidToken => Error::Unauthorized("Invalid token".to_string()),
            AuthError::TokenExpired => Error::Unauthorized("Token expired".to_string()),
            AuthError::UserNotFound => Error::Unauthorized("User not found".to_string()),
            AuthError::UserLoadError => Error::Internal("Failed to load user".to_string()),
            AuthError::TokenCreation => Error::Internal("Failed to issue token".to_string()),
            AuthError::PasswordHash => Error::Internal("Failed to process credentials".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_status_codes() {
        let cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::MissingCredentials, StatusCode::UNAUTHORIZED),
            (
                AuthError::InvalidAuthorizationFormat,
                StatusCode::UNAUTHORIZED,
            ),
            (AuthError::InvalidToken, StatusCode::UNAUTHORIZED),
            (AuthError::TokenExpired, StatusCode::UNAUTHORIZED),
            (AuthError::UserNotFound, StatusCode::UNAUTHORIZED),
            (AuthError::UserLoadError, StatusCode::INTERNAL_SERVER_ERROR),
            (AuthError::TokenCreation, StatusCode::INTERNAL_SERVER_ERROR),
            (AuthError::PasswordHash, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_conversion_to_common_error_preserves_status() {
        let err: streamhub_common::Error = AuthError::InvalidToken.into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let err: streamhub_common::Error = AuthError::TokenCreation.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
