//! Playlists domain: playlist CRUD and playlist membership

pub mod api;
pub mod domain;
pub mod repository;

pub use api::middleware::PlaylistsState;
pub use api::routes::routes;
pub use domain::entities::{Playlist, PlaylistVideo};
pub use repository::{PlaylistRepository, PlaylistsRepositories};
