//! Videos domain repositories

mod dashboard;
mod videos;

pub use dashboard::DashboardRepository;
pub use videos::{NewVideo, VideoListQuery, VideoRepository, VideoSort};

use sqlx::PgPool;

/// Bundle of all repositories in the videos domain
#[derive(Clone)]
pub struct VideosRepositories {
    pub videos: VideoRepository,
    pub dashboard: DashboardRepository,
}

impl VideosRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            videos: VideoRepository::new(pool.clone()),
            dashboard: DashboardRepository::new(pool),
        }
    }
}
