//! Social domain state and auth backend integration

use crate::SocialRepositories;
use axum::extract::FromRef;
use streamhub_auth::AuthBackend;

/// Application state for the social domain
#[derive(Clone)]
pub struct SocialState {
    pub repos: SocialRepositories,
    pub auth: AuthBackend,
}

impl FromRef<SocialState> for AuthBackend {
    fn from_ref(state: &SocialState) -> Self {
        state.auth.clone()
    }
}
