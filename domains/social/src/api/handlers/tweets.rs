//! Tweet handlers

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

use crate::api::middleware::SocialState;
use crate::domain::entities::Tweet;

#[derive(Debug, Deserialize, Validate)]
pub struct TweetRequest {
    #[validate(length(min = 1, max = 500, message = "Content must be 1-500 characters"))]
    pub content: String,
}

/// POST /v1/tweets
pub async fn create_tweet(
    AuthUser(ctx): AuthUser,
    State(state): State<SocialState>,
    ValidatedJson(payload): ValidatedJson<TweetRequest>,
) -> Result<(StatusCode, Json<Tweet>), Error> {
    let tweet = state
        .repos
        .tweets
        .create(ctx.user_id(), payload.content.trim())
        .await?;

    tracing::info!(tweet_id = %tweet.id, owner_id = %tweet.owner_id, "Tweet created");

    Ok((StatusCode::CREATED, Json(tweet)))
}

/// GET /v1/users/{user_id}/tweets
pub async fn list_user_tweets(
    AuthUser(_ctx): AuthUser,
    State(state): State<SocialState>,
    Path(user_id): Path<Uuid>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Tweet>>, Error> {
    let tweets = state
        .repos
        .tweets
        .list_for_user(user_id, pagination.limit(), pagination.offset())
        .await?;

    Ok(Json(tweets))
}

/// PATCH /v1/tweets/{id}
pub async fn update_tweet(
    AuthUser(ctx): AuthUser,
    State(state): State<SocialState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<TweetRequest>,
) -> Result<Json<Tweet>, Error> {
    let tweet = state
        .repos
        .tweets
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Tweet not found".to_string()))?;

    ensure_owner(&tweet, ctx.user_id())?;

    let updated = state
        .repos
        .tweets
        .update_content(id, payload.content.trim())
        .await?
        .ok_or_else(|| Error::NotFound("Tweet not found".to_string()))?;

    Ok(Json(updated))
}

/// DELETE /v1/tweets/{id}
pub async fn delete_tweet(
    AuthUser(ctx): AuthUser,
    State(state): State<SocialState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    let tweet = state
        .repos
        .tweets
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Tweet not found".to_string()))?;

    ensure_owner(&tweet, ctx.user_id())?;

    state.repos.tweets.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
