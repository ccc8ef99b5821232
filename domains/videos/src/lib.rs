//! Videos domain: publishing, catalog, views, creator dashboard

pub mod api;
pub mod domain;
pub mod repository;

pub use api::middleware::VideosState;
pub use api::routes::routes;
pub use domain::entities::{ChannelStats, Video, VideoWithOwner};
pub use repository::{DashboardRepository, VideoRepository, VideosRepositories};
