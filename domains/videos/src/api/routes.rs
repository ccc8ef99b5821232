//! Route definitions for the videos domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{dashboard, videos};
use super::middleware::VideosState;

fn video_routes() -> Router<VideosState> {
    Router::new()
        .route(
            "/v1/videos",
            get(videos::list_videos).post(videos::publish_video),
        )
        .route(
            "/v1/videos/{id}",
            get(videos::get_video)
                .patch(videos::update_video)
                .delete(videos::delete_video),
        )
        .route(
            "/v1/videos/{id}/toggle-publish",
            post(videos::toggle_publish),
        )
}

fn dashboard_routes() -> Router<VideosState> {
    Router::new()
        .route("/v1/dashboard/stats", get(dashboard::channel_stats))
        .route("/v1/dashboard/videos", get(dashboard::channel_videos))
}

/// Create all videos domain API routes
pub fn routes() -> Router<VideosState> {
    Router::new().merge(video_routes()).merge(dashboard_routes())
}
