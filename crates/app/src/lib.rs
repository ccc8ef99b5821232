//! StreamHub application composition root
//!
//! Composes all domain routers into a single application.

use axum::http::HeaderValue;
use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use streamhub_auth::{AuthBackend, AuthConfig};
use streamhub_comments::{CommentsRepositories, CommentsState};
use streamhub_common::Config;
use streamhub_media::{MediaConfig, MediaServiceFactory};
use streamhub_playlists::{PlaylistsRepositories, PlaylistsState};
use streamhub_social::{SocialRepositories, SocialState};
use streamhub_users::{UsersRepositories, UsersState};
use streamhub_videos::{VideosRepositories, VideosState};

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let auth_config = AuthConfig::from_env()?;
    let auth = AuthBackend::new(pool.clone(), auth_config);

    let media_config = MediaConfig::from_env()?;
    let media: Arc<dyn streamhub_media::MediaService> =
        Arc::from(MediaServiceFactory::create(media_config)?);

    let users_state = UsersState {
        repos: UsersRepositories::new(pool.clone()),
        auth: auth.clone(),
        media: media.clone(),
    };

    let videos_state = VideosState {
        repos: VideosRepositories::new(pool.clone()),
        auth: auth.clone(),
        media: media.clone(),
    };

    let playlists_state = PlaylistsState {
        repos: PlaylistsRepositories::new(pool.clone()),
        auth: auth.clone(),
    };

    let comments_state = CommentsState {
        repos: CommentsRepositories::new(pool.clone()),
        auth: auth.clone(),
    };

    let social_state = SocialState {
        repos: SocialRepositories::new(pool),
        auth,
    };

    // Build router composing domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "StreamHub API v0.1.0" }),
        )
        .merge(streamhub_users::routes().with_state(users_state))
        .merge(streamhub_videos::routes().with_state(videos_state))
        .merge(streamhub_playlists::routes().with_state(playlists_state))
        .merge(streamhub_comments::routes().with_state(comments_state))
        .merge(streamhub_social::routes().with_state(social_state));

    // Credentials ride on cookies, so a wildcard origin is only for
    // development setups without CORS_ORIGIN configured.
    let cors = match config.cors_origin.as_deref() {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .map_err(|e| anyhow::anyhow!("Invalid CORS_ORIGIN: {}", e))?;
            CorsLayer::new()
                .allow_origin(origin)
                .allow_credentials(true)
                .allow_methods(tower_http::cors::AllowMethods::mirror_request())
                .allow_headers(tower_http::cors::AllowHeaders::mirror_request())
        }
        None => CorsLayer::permissive(),
    };

    Ok(app.layer(cors))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
