//! Users domain state and auth backend integration

use crate::UsersRepositories;
use axum::extract::FromRef;
use std::sync::Arc;
use streamhub_auth::AuthBackend;
use streamhub_media::MediaService;

/// Application state for the users domain
#[derive(Clone)]
pub struct UsersState {
    pub repos: UsersRepositories,
    pub auth: AuthBackend,
    pub media: Arc<dyn MediaService>,
}

impl FromRef<UsersState> for AuthBackend {
    fn from_ref(state: &UsersState) -> Self {
        state.auth.clone()
    }
}
