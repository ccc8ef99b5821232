//! Route definitions for the social domain API

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{likes, subscriptions, tweets};
use super::middleware::SocialState;

fn like_routes() -> Router<SocialState> {
    Router::new()
        .route("/v1/likes/videos", get(likes::liked_videos))
        .route("/v1/likes/videos/{id}/toggle", post(likes::toggle_video_like))
        .route(
            "/v1/likes/comments/{id}/toggle",
            post(likes::toggle_comment_like),
        )
        .route(
            "/v1/likes/tweets/{id}/toggle",
            post(likes::toggle_tweet_like),
        )
}

fn subscription_routes() -> Router<SocialState> {
    Router::new()
        .route("/v1/subscriptions", get(subscriptions::subscribed_channels))
        .route(
            "/v1/subscriptions/channels/{channel_id}/toggle",
            post(subscriptions::toggle_subscription),
        )
        .route(
            "/v1/subscriptions/channels/{channel_id}/subscribers",
            get(subscriptions::channel_subscribers),
        )
}

fn tweet_routes() -> Router<SocialState> {
    Router::new()
        .route("/v1/tweets", post(tweets::create_tweet))
        .route(
            "/v1/tweets/{id}",
            patch(tweets::update_tweet).delete(tweets::delete_tweet),
        )
        .route("/v1/users/{user_id}/tweets", get(tweets::list_user_tweets))
}

/// Create all social domain API routes
pub fn routes() -> Router<SocialState> {
    Router::new()
        .merge(like_routes())
        .merge(subscription_routes())
        .merge(tweet_routes())
}
