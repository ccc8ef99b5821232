//! Users domain: registration, login, token refresh, profiles, channels, watch history

pub mod api;
pub mod domain;
pub mod repository;

pub use api::middleware::UsersState;
pub use api::routes::routes;
pub use domain::entities::{ChannelProfile, User, WatchHistoryEntry};
pub use repository::{UserRepository, UsersRepositories, WatchHistoryRepository};
