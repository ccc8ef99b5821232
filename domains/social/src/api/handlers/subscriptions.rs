//! Subscription handlers

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Serialize;
use uuid::Uuid;

use streamhub_auth::AuthUser;
use streamhub_common::{Error, Pagination};

use crate::api::middleware::SocialState;
use crate::domain::entities::{SubscribedChannel, Subscriber};

#[derive(Debug, Serialize)]
pub struct ToggleSubscriptionResponse {
    pub subscribed: bool,
}

/// POST /v1/subscriptions/channels/{channel_id}/toggle
pub async fn toggle_subscription(
    AuthUser(ctx): AuthUser,
    State(state): State<SocialState>,
    Path(channel_id): Path<Uuid>,
) -> Result<Json<ToggleSubscriptionResponse>, Error> {
    if channel_id == ctx.user_id() {
        return Err(Error::Validation(
            "Cannot subscribe to your own channel".to_string(),
        ));
    }

    let subscribed = state
        .repos
        .subscriptions
        .toggle(ctx.user_id(), channel_id)
        .await?;

    Ok(Json(ToggleSubscriptionResponse { subscribed }))
}

/// GET /v1/subscriptions/channels/{channel_id}/subscribers
pub async fn channel_subscribers(
    AuthUser(_ctx): AuthUser,
    State(state): State<SocialState>,
    Path(channel_id): Path<Uuid>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Subscriber>>, Error> {
    let subscribers = state
        .repos
        .subscriptions
        .subscribers(channel_id, pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(subscribers))
}

/// GET /v1/subscriptions
pub async fn subscribed_channels(
    AuthUser(ctx): AuthUser,
    State(state): State<SocialState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<SubscribedChannel>>, Error> {
    let channels = state
        .repos
        .subscriptions
        .subscribed_channels(ctx.user_id(), pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(channels))
}
