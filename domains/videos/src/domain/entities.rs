//! Videos domain entities

use chrono::{DateTime, Utc};
use serde::Serialize;
use streamhub_common::Owned;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Video {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub video_asset_id: String,
    pub thumbnail_url: String,
    pub thumbnail_asset_id: String,
    pub duration_secs: f64,
    pub views: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owned for Video {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

/// A video joined with a snapshot of its owner, for list and detail reads.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct VideoWithOwner {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration_secs: f64,
    pub views: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub owner_username: String,
    pub owner_full_name: String,
    pub owner_avatar_url: Option<String>,
}

/// Creator dashboard aggregates for one channel.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ChannelStats {
    pub total_videos: i64,
    pub total_views: i64,
    pub total_subscribers: i64,
    pub total_likes: i64,
}
