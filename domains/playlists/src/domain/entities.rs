//! Playlists domain entities

use chrono::{DateTime, Utc};
use serde::Serialize;
use streamhub_common::Owned;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Playlist {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owned for Playlist {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

/// A video inside a playlist, in insertion order.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PlaylistVideo {
    pub video_id: Uuid,
    pub title: String,
    pub thumbnail_url: String,
    pub duration_secs: f64,
    pub views: i64,
    pub owner_id: Uuid,
    pub added_at: DateTime<Utc>,
}
