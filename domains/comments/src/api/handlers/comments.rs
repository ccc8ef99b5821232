//! Comment handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use streamhub_auth::AuthUser;
use streamhub_common::{ensure_owner, Error, Pagination, ValidatedJson};

use crate::api::middleware::CommentsState;
use crate::domain::entities::{Comment, CommentWithAuthor};

#[derive(Debug, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

/// GET /v1/videos/{id}/comments
pub async fn list_comments(
    AuthUser(_ctx): AuthUser,
    State(state): State<CommentsState>,
    Path(video_id): Path<Uuid>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<CommentWithAuthor>>, Error> {
    if !state.repos.comments.video_exists(video_id).await? {
        return Err(Error::NotFound("Video not found".to_string()));
    }

    let comments = state
        .repos
        .comments
        .list_for_video(video_id, pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(comments))
}

/// POST /v1/videos/{id}/comments
pub async fn create_comment(
    AuthUser(ctx): AuthUser,
    State(state): State<CommentsState>,
    Path(video_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CommentRequest>,
) -> Result<(StatusCode, Json<Comment>), Error> {
    if !state.repos.comments.video_exists(video_id).await? {
        return Err(Error::NotFound("Video not found".to_string()));
    }

    let comment = state
        .repos
        .comments
        .create(video_id, ctx.user_id(), payload.content.trim())
        .await?;

    tracing::info!(comment_id = %comment.id, video_id = %video_id, "Comment created");

    Ok((StatusCode::CREATED, Json(comment)))
}

/// PATCH /v1/comments/{id}
pub async fn update_comment(
    AuthUser(ctx): AuthUser,
    State(state): State<CommentsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CommentRequest>,
) -> Result<Json<Comment>, Error> {
    let comment = state
        .repos
        .comments
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Comment not found".to_string()))?;

    ensure_owner(&comment, ctx.user_id())?;

    let updated = state
        .repos
        .comments
        .update_content(id, payload.content.trim())
        .await?
        .ok_or_else(|| Error::NotFound("Comment not found".to_string()))?;

    Ok(Json(updated))
}

/// DELETE /v1/comments/{id}
pub async fn delete_comment(
    AuthUser(ctx): AuthUser,
    State(state): State<CommentsState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    let comment = state
        .repos
        .comments
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Comment not found".to_string()))?;

    ensure_owner(&comment, ctx.user_id())?;

    state.repos.comments.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
