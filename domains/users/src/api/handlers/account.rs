//! Account handlers: current user, profile updates, avatar/cover uploads,
//! watch history.

use axum::{
    extract::{Multipart, Query, State},
    response::Json,
};
use serde::Deserialize;
use validator::Validate;

use streamhub_auth::{AuthIdentity, AuthUser};
use streamhub_common::{Error, Pagination, ValidatedJson};
use streamhub_media::AssetKind;

use crate::api::middleware::UsersState;
use crate::domain::entities::WatchHistoryEntry;

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,
}

/// GET /v1/account
pub async fn get_current_user(AuthUser(ctx): AuthUser) -> Json<AuthIdentity> {
    Json(ctx.identity)
}

/// PATCH /v1/account
pub async fn update_profile(
    AuthUser(ctx): AuthUser,
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<AuthIdentity>, Error> {
    if request.full_name.is_none() && request.email.is_none() {
        return Err(Error::Validation(
            "full_name or email is required".to_string(),
        ));
    }

    let email = request.email.map(|e| e.trim().to_lowercase());

    let updated = state
        .repos
        .users
        .update_profile(ctx.user_id(), request.full_name, email)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(updated.to_identity()))
}

/// PATCH /v1/account/avatar (multipart, field `avatar`)
pub async fn update_avatar(
    AuthUser(ctx): AuthUser,
    State(state): State<UsersState>,
    multipart: Multipart,
) -> Result<Json<AuthIdentity>, Error> {
    swap_image(ctx, state, multipart, ImageSlot::Avatar).await
}

/// PATCH /v1/account/cover (multipart, field `cover_image`)
pub async fn update_cover_image(
    AuthUser(ctx): AuthUser,
    State(state): State<UsersState>,
    multipart: Multipart,
) -> Result<Json<AuthIdentity>, Error> {
    swap_image(ctx, state, multipart, ImageSlot::CoverImage).await
}

enum ImageSlot {
    Avatar,
    CoverImage,
}

impl ImageSlot {
    fn field_name(&self) -> &'static str {
        match self {
            ImageSlot::Avatar => "avatar",
            ImageSlot::CoverImage => "cover_image",
        }
    }
}

/// Upload the new image first, then swap the reference, then delete the old
/// asset. Deletion is best-effort: a dangling asset on the host beats a user
/// row pointing at a deleted image.
async fn swap_image(
    ctx: streamhub_auth::AuthContext,
    state: UsersState,
    mut multipart: Multipart,
    slot: ImageSlot,
) -> Result<Json<AuthIdentity>, Error> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() == Some(slot.field_name()) {
            let filename = field
                .file_name()
                .unwrap_or(slot.field_name())
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| Error::Validation(format!("Failed to read upload: {}", e)))?;
            upload = Some((filename, bytes.to_vec()));
        }
    }

    let (filename, bytes) = upload.ok_or_else(|| {
        Error::Validation(format!("{} file is required", slot.field_name()))
    })?;

    let user = state
        .repos
        .users
        .get_by_id(ctx.user_id())
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    let old_asset_id = match slot {
        ImageSlot::Avatar => user.avatar_asset_id.clone(),
        ImageSlot::CoverImage => user.cover_image_asset_id.clone(),
    };

    let asset = state
        .media
        .upload(AssetKind::Image, &filename, bytes)
        .await
        .map_err(|e| Error::Internal(format!("Image upload failed: {}", e)))?;

    let updated = match slot {
        ImageSlot::Avatar => {
            state
                .repos
                .users
                .update_avatar(user.id, &asset.url, &asset.asset_id)
                .await?
        }
        ImageSlot::CoverImage => {
            state
                .repos
                .users
                .update_cover_image(user.id, &asset.url, &asset.asset_id)
                .await?
        }
    }
    .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    if let Some(old) = old_asset_id {
        if let Err(e) = state.media.delete(&old).await {
            tracing::warn!(error = %e, asset_id = %old, "Failed to delete replaced image asset");
        }
    }

    Ok(Json(updated.to_identity()))
}

/// GET /v1/account/watch-history
pub async fn watch_history(
    AuthUser(ctx): AuthUser,
    State(state): State<UsersState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<WatchHistoryEntry>>, Error> {
    let entries = state
        .repos
        .watch_history
        .list(ctx.user_id(), pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(entries))
}
