//! Social domain entities

use chrono::{DateTime, Utc};
use serde::Serialize;
use streamhub_common::Owned;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Tweet {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owned for Tweet {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

/// A video the caller has liked, with a snapshot of the video row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LikedVideo {
    pub video_id: Uuid,
    pub title: String,
    pub thumbnail_url: String,
    pub duration_secs: f64,
    pub views: i64,
    pub owner_id: Uuid,
    pub owner_username: String,
    pub liked_at: DateTime<Utc>,
}

/// A user subscribed to some channel.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Subscriber {
    pub user_id: Uuid,
    pub username: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub subscribed_at: DateTime<Utc>,
}

/// A channel the caller is subscribed to.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SubscribedChannel {
    pub channel_id: Uuid,
    pub username: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub subscribed_at: DateTime<Utc>,
}
