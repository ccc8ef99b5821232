//! Route definitions for the users domain API

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{account, auth, channels};
use super::middleware::UsersState;

/// Authentication flow routes (register/login/refresh are public)
fn auth_routes() -> Router<UsersState> {
    Router::new()
        .route("/v1/auth/register", post(auth::register))
        .route("/v1/auth/login", post(auth::login))
        .route("/v1/auth/refresh", post(auth::refresh))
        .route("/v1/auth/logout", post(auth::logout))
        .route("/v1/auth/change-password", post(auth::change_password))
}

/// Account routes
fn account_routes() -> Router<UsersState> {
    Router::new()
        .route(
            "/v1/account",
            get(account::get_current_user).patch(account::update_profile),
        )
        .route("/v1/account/avatar", patch(account::update_avatar))
        .route("/v1/account/cover", patch(account::update_cover_image))
        .route("/v1/account/watch-history", get(account::watch_history))
}

/// Channel routes
fn channel_routes() -> Router<UsersState> {
    Router::new().route("/v1/channels/{username}", get(channels::get_channel))
}

/// Create all users domain API routes
pub fn routes() -> Router<UsersState> {
    Router::new()
        .merge(auth_routes())
        .merge(account_routes())
        .merge(channel_routes())
}
