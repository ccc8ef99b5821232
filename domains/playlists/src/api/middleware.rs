//! Playlists domain state and auth backend integration

use crate::PlaylistsRepositories;
use axum::extract::FromRef;
use streamhub_auth::AuthBackend;

/// Application state for the playlists domain
#[derive(Clone)]
pub struct PlaylistsState {
    pub repos: PlaylistsRepositories,
    pub auth: AuthBackend,
}

impl FromRef<PlaylistsState> for AuthBackend {
    fn from_ref(state: &PlaylistsState) -> Self {
        state.auth.clone()
    }
}
