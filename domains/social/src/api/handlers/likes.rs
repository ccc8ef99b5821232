//! Like handlers

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Serialize;
use uuid::Uuid;

use streamhub_auth::AuthUser;
use streamhub_common::{Error, Pagination};

use crate::api::middleware::SocialState;
use crate::domain::entities::LikedVideo;
use crate::repository::LikeTarget;

#[derive(Debug, Serialize)]
pub struct ToggleLikeResponse {
    pub liked: bool,
}

async fn toggle(
    state: &SocialState,
    target: LikeTarget,
    user_id: Uuid,
    target_id: Uuid,
) -> Result<Json<ToggleLikeResponse>, Error> {
    let liked = state.repos.likes.toggle(target, user_id, target_id).await?;

    Ok(Json(ToggleLikeResponse { liked }))
}

/// POST /v1/likes/videos/{id}/toggle
pub async fn toggle_video_like(
    AuthUser(ctx): AuthUser,
    State(state): State<SocialState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ToggleLikeResponse>, Error> {
    toggle(&state, LikeTarget::Video, ctx.user_id(), id).await
}

/// POST /v1/likes/comments/{id}/toggle
pub async fn toggle_comment_like(
    AuthUser(ctx): AuthUser,
    State(state): State<SocialState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ToggleLikeResponse>, Error> {
    toggle(&state, LikeTarget::Comment, ctx.user_id(), id).await
}

/// POST /v1/likes/tweets/{id}/toggle
pub async fn toggle_tweet_like(
    AuthUser(ctx): AuthUser,
    State(state): State<SocialState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ToggleLikeResponse>, Error> {
    toggle(&state, LikeTarget::Tweet, ctx.user_id(), id).await
}

/// GET /v1/likes/videos
pub async fn liked_videos(
    AuthUser(ctx): AuthUser,
    State(state): State<SocialState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<LikedVideo>>, Error> {
    let videos = state
        .repos
        .likes
        .liked_videos(ctx.user_id(), pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(videos))
}
