//! Creator dashboard repository
//!
//! Cross-domain aggregate reads over videos, subscriptions, and likes.

use crate::domain::entities::{ChannelStats, Video};
use streamhub_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Totals for one channel: videos, views, subscribers, video likes.
    pub async fn channel_stats(&self, channel_id: Uuid) -> Result<ChannelStats> {
        let stats: ChannelStats = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM videos v
                  WHERE v.owner_id = $1) AS total_videos,
                (SELECT COALESCE(SUM(v.views), 0)::BIGINT FROM videos v
                  WHERE v.owner_id = $1) AS total_views,
                (SELECT COUNT(*) FROM subscriptions s
                  WHERE s.channel_id = $1) AS total_subscribers,
                (SELECT COUNT(*) FROM likes l
                  INNER JOIN videos v ON v.id = l.video_id
                  WHERE v.owner_id = $1) AS total_likes
            "#,
        )
        .bind(channel_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }

    /// All of the channel's videos, including unpublished ones, newest first.
    pub async fn channel_videos(
        &self,
        channel_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Video>> {
        let videos: Vec<Video> = sqlx::query_as(
            r#"
            SELECT id, owner_id, title, description, video_url, video_asset_id,
                   thumbnail_url, thumbnail_asset_id, duration_secs, views, is_published,
                   created_at, updated_at
            FROM videos
            WHERE owner_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(channel_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(videos)
    }
}
