//! Channel profile handler

use axum::{
    extract::{Path, State},
    response::Json,
};

use streamhub_auth::AuthUser;
use streamhub_common::Error;

use crate::api::middleware::UsersState;
use crate::domain::entities::ChannelProfile;

/// GET /v1/channels/{username}
///
/// Public profile with subscriber aggregates; `is_subscribed` is computed
/// relative to the requesting user.
pub async fn get_channel(
    AuthUser(ctx): AuthUser,
    State(state): State<UsersState>,
    Path(username): Path<String>,
) -> Result<Json<ChannelProfile>, Error> {
    let username = username.trim().to_lowercase();
    if username.is_empty() {
        return Err(Error::Validation("Username is required".to_string()));
    }

    let profile = state
        .repos
        .users
        .channel_profile(&username, ctx.user_id())
        .await?
        .ok_or_else(|| Error::NotFound("Channel does not exist".to_string()))?;

    Ok(Json(profile))
}
