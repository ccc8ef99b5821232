//! Route definitions for the playlists domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::playlists;
use super::middleware::PlaylistsState;

/// Create all playlists domain API routes
pub fn routes() -> Router<PlaylistsState> {
    Router::new()
        .route("/v1/playlists", post(playlists::create_playlist))
        .route(
            "/v1/playlists/{id}",
            get(playlists::get_playlist)
                .patch(playlists::update_playlist)
                .delete(playlists::delete_playlist),
        )
        .route(
            "/v1/playlists/{id}/videos/{video_id}",
            post(playlists::add_video).delete(playlists::remove_video),
        )
        .route(
            "/v1/users/{user_id}/playlists",
            get(playlists::list_user_playlists),
        )
}
