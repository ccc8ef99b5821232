//! Playlists domain repositories

mod playlists;

pub use playlists::PlaylistRepository;

use sqlx::PgPool;

/// Bundle of all repositories in the playlists domain
#[derive(Clone)]
pub struct PlaylistsRepositories {
    pub playlists: PlaylistRepository,
}

impl PlaylistsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            playlists: PlaylistRepository::new(pool),
        }
    }
}
