//! Authentication core for the StreamHub API
//!
//! Provides access/refresh token issuance and verification, password
//! hashing, auth cookies, and axum extractors that work with any domain
//! state implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod cookies;
mod error;
mod extractors;
mod jwt;
mod password;
mod types;

pub use backend::AuthBackend;
pub use claims::{AccessClaims, RefreshClaims};
pub use config::AuthConfig;
pub use context::AuthContext;
pub use cookies::{
    access_cookie, clear_access_cookie, clear_refresh_cookie, refresh_cookie, ACCESS_COOKIE,
    REFRESH_COOKIE,
};
pub use error::AuthError;
pub use extractors::AuthUser;
pub use jwt::{issue_access_token, issue_refresh_token, verify_access_token, verify_refresh_token};
pub use password::{hash_password, verify_password};
pub use types::AuthIdentity;
