//! Creator dashboard handlers

use axum::{
    extract::{Query, State},
    response::Json,
};

use streamhub_auth::AuthUser;
use streamhub_common::{Error, Pagination};

use crate::api::middleware::VideosState;
use crate::domain::entities::{ChannelStats, Video};

/// GET /v1/dashboard/stats
pub async fn channel_stats(
    AuthUser(ctx): AuthUser,
    State(state): State<VideosState>,
) -> Result<Json<ChannelStats>, Error> {
    let stats = state.repos.dashboard.channel_stats(ctx.user_id()).await?;
    Ok(Json(stats))
}

/// GET /v1/dashboard/videos
///
/// The caller's own videos, including unpublished ones.
pub async fn channel_videos(
    AuthUser(ctx): AuthUser,
    State(state): State<VideosState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Video>>, Error> {
    let videos = state
        .repos
        .dashboard
        .channel_videos(ctx.user_id(), pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(videos))
}
