//! Watch history repository

use crate::domain::entities::WatchHistoryEntry;
use streamhub_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct WatchHistoryRepository {
    pool: PgPool,
}

impl WatchHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The user's watch history, newest first, with video and owner snapshot.
    /// Rows are written by the video domain when a view is counted.
    pub async fn list(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<WatchHistoryEntry>> {
        let entries: Vec<WatchHistoryEntry> = sqlx::query_as(
            r#"
            SELECT v.id AS video_id, v.title, v.thumbnail_url, v.duration_secs, v.views,
                   u.id AS owner_id, u.username AS owner_username,
                   u.full_name AS owner_full_name, u.avatar_url AS owner_avatar_url,
                   w.watched_at
            FROM watch_history w
            INNER JOIN videos v ON v.id = w.video_id
            INNER JOIN users u ON u.id = v.owner_id
            WHERE w.user_id = $1
            ORDER BY w.watched_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
