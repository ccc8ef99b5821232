//! Route definitions for the comments domain API

use axum::{routing::get, routing::patch, Router};

use super::handlers::comments;
use super::middleware::CommentsState;

/// Create all comments domain API routes
pub fn routes() -> Router<CommentsState> {
    Router::new()
        .route(
            "/v1/videos/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/v1/comments/{id}",
            patch(comments::update_comment).delete(comments::delete_comment),
        )
}
