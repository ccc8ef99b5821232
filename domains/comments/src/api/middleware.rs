//! Comments domain state and auth backend integration

use crate::CommentsRepositories;
use axum::extract::FromRef;
use streamhub_auth::AuthBackend;

/// Application state for the comments domain
#[derive(Clone)]
pub struct CommentsState {
    pub repos: CommentsRepositories,
    pub auth: AuthBackend,
}

impl FromRef<CommentsState> for AuthBackend {
    fn from_ref(state: &CommentsState) -> Self {
        state.auth.clone()
    }
}
