//! Videos domain state and auth backend integration

use crate::VideosRepositories;
use axum::extract::FromRef;
use std::sync::Arc;
use streamhub_auth::AuthBackend;
use streamhub_media::MediaService;

/// Application state for the videos domain
#[derive(Clone)]
pub struct VideosState {
    pub repos: VideosRepositories,
    pub auth: AuthBackend,
    pub media: Arc<dyn MediaService>,
}

impl FromRef<VideosState> for AuthBackend {
    fn from_ref(state: &VideosState) -> Self {
        state.auth.clone()
    }
}
