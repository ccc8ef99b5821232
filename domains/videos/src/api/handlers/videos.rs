//! Video catalog handlers

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use streamhub_auth::AuthUser;
use streamhub_common::{ensure_owner, Error, Pagination};
use streamhub_media::AssetKind;

use crate::api::middleware::VideosState;
use crate::domain::entities::{Video, VideoWithOwner};
use crate::repository::{NewVideo, VideoListQuery, VideoSort};

#[derive(Debug, Deserialize)]
pub struct ListVideosParams {
    /// Free-text filter over title and description
    pub q: Option<String>,
    pub owner_id: Option<Uuid>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// POST /v1/videos (multipart: `title`, `description`, `video`, `thumbnail`)
pub async fn publish_video(
    AuthUser(ctx): AuthUser,
    State(state): State<VideosState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Video>), Error> {
    let mut title: Option<String> = None;
    let mut description = String::new();
    let mut video_file: Option<(String, Vec<u8>)> = None;
    let mut thumbnail_file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(format!("Malformed multipart body: {}", e)))?
    {
        match field.name() {
            Some("title") => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| Error::Validation(format!("Invalid title field: {}", e)))?,
                );
            }
            Some("description") => {
                description = field.text().await.map_err(|e| {
                    Error::Validation(format!("Invalid description field: {}", e))
                })?;
            }
            Some("video") => {
                let filename = field.file_name().unwrap_or("video").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| Error::Validation(format!("Failed to read video: {}", e)))?;
                video_file = Some((filename, bytes.to_vec()));
            }
            Some("thumbnail") => {
                let filename = field.file_name().unwrap_or("thumbnail").to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    Error::Validation(format!("Failed to read thumbnail: {}", e))
                })?;
                thumbnail_file = Some((filename, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let title = title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::Validation("title is required".to_string()))?;
    let (video_name, video_bytes) =
        video_file.ok_or_else(|| Error::Validation("video file is required".to_string()))?;
    let (thumb_name, thumb_bytes) =
        thumbnail_file.ok_or_else(|| Error::Validation("thumbnail file is required".to_string()))?;

    let video_asset = state
        .media
        .upload(AssetKind::Video, &video_name, video_bytes)
        .await
        .map_err(|e| Error::Internal(format!("Video upload failed: {}", e)))?;

    let thumb_asset = match state
        .media
        .upload(AssetKind::Image, &thumb_name, thumb_bytes)
        .await
    {
        Ok(asset) => asset,
        Err(e) => {
            // Don't leave the video asset orphaned on the host
            if let Err(del) = state.media.delete(&video_asset.asset_id).await {
                tracing::warn!(error = %del, asset_id = %video_asset.asset_id,
                    "Failed to clean up video asset after thumbnail failure");
            }
            return Err(Error::Internal(format!("Thumbnail upload failed: {}", e)));
        }
    };

    let video = state
        .repos
        .videos
        .create(NewVideo {
            owner_id: ctx.user_id(),
            title,
            description,
            video_url: video_asset.url,
            video_asset_id: video_asset.asset_id,
            thumbnail_url: thumb_asset.url,
            thumbnail_asset_id: thumb_asset.asset_id,
            duration_secs: video_asset.duration_secs.unwrap_or(0.0),
        })
        .await?;

    tracing::info!(video_id = %video.id, owner_id = %video.owner_id, "Video published");

    Ok((StatusCode::CREATED, Json(video)))
}

/// GET /v1/videos
pub async fn list_videos(
    AuthUser(ctx): AuthUser,
    State(state): State<VideosState>,
    Query(params): Query<ListVideosParams>,
) -> Result<Json<Vec<VideoWithOwner>>, Error> {
    let sort = match params.sort_by.as_deref() {
        None => VideoSort::default(),
        Some(value) => VideoSort::parse(value)
            .ok_or_else(|| Error::Validation(format!("Unknown sort column: {}", value)))?,
    };

    let ascending = match params.sort_dir.as_deref() {
        None | Some("desc") => false,
        Some("asc") => true,
        Some(other) => {
            return Err(Error::Validation(format!(
                "sort_dir must be asc or desc, got {}",
                other
            )))
        }
    };

    let pagination = Pagination {
        page: params.page,
        limit: params.limit,
    };

    let videos = state
        .repos
        .videos
        .list(&VideoListQuery {
            text: params.q,
            owner_id: params.owner_id,
            viewer_id: ctx.user_id(),
            sort,
            ascending,
            limit: pagination.limit(),
            offset: pagination.offset(),
        })
        .await?;

    Ok(Json(videos))
}

/// GET /v1/videos/{id}
///
/// Counts a view and records the caller's watch history. Unpublished videos
/// are visible only to their owner.
pub async fn get_video(
    AuthUser(ctx): AuthUser,
    State(state): State<VideosState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VideoWithOwner>, Error> {
    let video = state
        .repos
        .videos
        .get_with_owner(id)
        .await?
        .ok_or_else(|| Error::NotFound("Video not found".to_string()))?;

    if !video.is_published && video.owner_id != ctx.user_id() {
        return Err(Error::NotFound("Video not found".to_string()));
    }

    state.repos.videos.record_view(id, ctx.user_id()).await?;

    Ok(Json(video))
}

/// PATCH /v1/videos/{id} (multipart: optional `title`, `description`, `thumbnail`)
pub async fn update_video(
    AuthUser(ctx): AuthUser,
    State(state): State<VideosState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<Video>, Error> {
    let video = state
        .repos
        .videos
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Video not found".to_string()))?;

    ensure_owner(&video, ctx.user_id())?;

    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut thumbnail_file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(format!("Malformed multipart body: {}", e)))?
    {
        match field.name() {
            Some("title") => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| Error::Validation(format!("Invalid title field: {}", e)))?,
                )
            }
            Some("description") => {
                description = Some(field.text().await.map_err(|e| {
                    Error::Validation(format!("Invalid description field: {}", e))
                })?)
            }
            Some("thumbnail") => {
                let filename = field.file_name().unwrap_or("thumbnail").to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    Error::Validation(format!("Failed to read thumbnail: {}", e))
                })?;
                thumbnail_file = Some((filename, bytes.to_vec()));
            }
            _ => {}
        }
    }

    if title.is_none() && description.is_none() && thumbnail_file.is_none() {
        return Err(Error::Validation(
            "title, description, or thumbnail is required".to_string(),
        ));
    }

    let mut updated = state
        .repos
        .videos
        .update_metadata(id, title, description)
        .await?
        .ok_or_else(|| Error::NotFound("Video not found".to_string()))?;

    if let Some((filename, bytes)) = thumbnail_file {
        let old_asset_id = video.thumbnail_asset_id.clone();
        let asset = state
            .media
            .upload(AssetKind::Image, &filename, bytes)
            .await
            .map_err(|e| Error::Internal(format!("Thumbnail upload failed: {}", e)))?;

        updated = state
            .repos
            .videos
            .update_thumbnail(id, &asset.url, &asset.asset_id)
            .await?
            .ok_or_else(|| Error::NotFound("Video not found".to_string()))?;

        if let Err(e) = state.media.delete(&old_asset_id).await {
            tracing::warn!(error = %e, asset_id = %old_asset_id,
                "Failed to delete replaced thumbnail asset");
        }
    }

    Ok(Json(updated))
}

/// DELETE /v1/videos/{id}
pub async fn delete_video(
    AuthUser(ctx): AuthUser,
    State(state): State<VideosState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    let video = state
        .repos
        .videos
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Video not found".to_string()))?;

    ensure_owner(&video, ctx.user_id())?;

    state.repos.videos.delete(id).await?;

    // Best-effort asset cleanup after the row is gone
    for asset_id in [&video.video_asset_id, &video.thumbnail_asset_id] {
        if let Err(e) = state.media.delete(asset_id).await {
            tracing::warn!(error = %e, asset_id = %asset_id, "Failed to delete video asset");
        }
    }

    tracing::info!(video_id = %id, "Video deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/videos/{id}/toggle-publish
pub async fn toggle_publish(
    AuthUser(ctx): AuthUser,
    State(state): State<VideosState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Video>, Error> {
    let video = state
        .repos
        .videos
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Video not found".to_string()))?;

    ensure_owner(&video, ctx.user_id())?;

    let updated = state
        .repos
        .videos
        .toggle_publish(id)
        .await?
        .ok_or_else(|| Error::NotFound("Video not found".to_string()))?;

    Ok(Json(updated))
}
