//! Playlist handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use streamhub_auth::AuthUser;
use streamhub_common::{ensure_owner, Error, ValidatedJson};

use crate::api::middleware::PlaylistsState;
use crate::domain::entities::{Playlist, PlaylistVideo};

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlaylistRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePlaylistRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlaylistDetail {
    #[serde(flatten)]
    pub playlist: Playlist,
    pub videos: Vec<PlaylistVideo>,
}

/// POST /v1/playlists
pub async fn create_playlist(
    AuthUser(ctx): AuthUser,
    State(state): State<PlaylistsState>,
    ValidatedJson(payload): ValidatedJson<CreatePlaylistRequest>,
) -> Result<(StatusCode, Json<Playlist>), Error> {
    let playlist = state
        .repos
        .playlists
        .create(ctx.user_id(), payload.name.trim(), &payload.description)
        .await?;

    tracing::info!(playlist_id = %playlist.id, owner_id = %playlist.owner_id, "Playlist created");

    Ok((StatusCode::CREATED, Json(playlist)))
}

/// GET /v1/users/{user_id}/playlists
pub async fn list_user_playlists(
    AuthUser(_ctx): AuthUser,
    State(state): State<PlaylistsState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Playlist>>, Error> {
    let playlists = state.repos.playlists.list_for_user(user_id).await?;

    Ok(Json(playlists))
}

/// GET /v1/playlists/{id}
pub async fn get_playlist(
    AuthUser(_ctx): AuthUser,
    State(state): State<PlaylistsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlaylistDetail>, Error> {
    let playlist = state
        .repos
        .playlists
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Playlist not found".to_string()))?;

    let videos = state.repos.playlists.videos(id).await?;

    Ok(Json(PlaylistDetail { playlist, videos }))
}

/// PATCH /v1/playlists/{id}
pub async fn update_playlist(
    AuthUser(ctx): AuthUser,
    State(state): State<PlaylistsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdatePlaylistRequest>,
) -> Result<Json<Playlist>, Error> {
    if payload.name.is_none() && payload.description.is_none() {
        return Err(Error::Validation(
            "name or description is required".to_string(),
        ));
    }

    let playlist = state
        .repos
        .playlists
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Playlist not found".to_string()))?;

    ensure_owner(&playlist, ctx.user_id())?;

    let updated = state
        .repos
        .playlists
        .update(id, payload.name, payload.description)
        .await?
        .ok_or_else(|| Error::NotFound("Playlist not found".to_string()))?;

    Ok(Json(updated))
}

/// DELETE /v1/playlists/{id}
pub async fn delete_playlist(
    AuthUser(ctx): AuthUser,
    State(state): State<PlaylistsState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    let playlist = state
        .repos
        .playlists
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Playlist not found".to_string()))?;

    ensure_owner(&playlist, ctx.user_id())?;

    state.repos.playlists.delete(id).await?;

    tracing::info!(playlist_id = %id, "Playlist deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/playlists/{id}/videos/{video_id}
pub async fn add_video(
    AuthUser(ctx): AuthUser,
    State(state): State<PlaylistsState>,
    Path((playlist_id, video_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, Error> {
    let playlist = state
        .repos
        .playlists
        .get_by_id(playlist_id)
        .await?
        .ok_or_else(|| Error::NotFound("Playlist not found".to_string()))?;

    ensure_owner(&playlist, ctx.user_id())?;

    state
        .repos
        .playlists
        .add_video(playlist_id, video_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /v1/playlists/{id}/videos/{video_id}
pub async fn remove_video(
    AuthUser(ctx): AuthUser,
    State(state): State<PlaylistsState>,
    Path((playlist_id, video_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, Error> {
    let playlist = state
        .repos
        .playlists
        .get_by_id(playlist_id)
        .await?
        .ok_or_else(|| Error::NotFound("Playlist not found".to_string()))?;

    ensure_owner(&playlist, ctx.user_id())?;

    state
        .repos
        .playlists
        .remove_video(playlist_id, video_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
