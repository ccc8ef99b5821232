//! Video repository

use crate::domain::entities::{Video, VideoWithOwner};
use streamhub_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

const VIDEO_COLUMNS: &str = r#"
    id, owner_id, title, description, video_url, video_asset_id,
    thumbnail_url, thumbnail_asset_id, duration_secs, views, is_published,
    created_at, updated_at
"#;

#[derive(Debug)]
pub struct NewVideo {
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub video_asset_id: String,
    pub thumbnail_url: String,
    pub thumbnail_asset_id: String,
    pub duration_secs: f64,
}

/// Sort column allow-list for video listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoSort {
    #[default]
    CreatedAt,
    Views,
    Duration,
}

impl VideoSort {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "created_at" => Some(VideoSort::CreatedAt),
            "views" => Some(VideoSort::Views),
            "duration" => Some(VideoSort::Duration),
            _ => None,
        }
    }

    fn column(&self) -> &'static str {
        match self {
            VideoSort::CreatedAt => "v.created_at",
            VideoSort::Views => "v.views",
            VideoSort::Duration => "v.duration_secs",
        }
    }
}

/// Listing filters. Unpublished videos are only visible when the viewer is
/// the owner being filtered on.
#[derive(Debug)]
pub struct VideoListQuery {
    pub text: Option<String>,
    pub owner_id: Option<Uuid>,
    pub viewer_id: Uuid,
    pub sort: VideoSort,
    pub ascending: bool,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_video: NewVideo) -> Result<Video> {
        let video: Video = sqlx::query_as(&format!(
            r#"
            INSERT INTO videos (owner_id, title, description, video_url, video_asset_id,
                                thumbnail_url, thumbnail_asset_id, duration_secs)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {VIDEO_COLUMNS}
            "#
        ))
        .bind(new_video.owner_id)
        .bind(&new_video.title)
        .bind(&new_video.description)
        .bind(&new_video.video_url)
        .bind(&new_video.video_asset_id)
        .bind(&new_video.thumbnail_url)
        .bind(&new_video.thumbnail_asset_id)
        .bind(new_video.duration_secs)
        .fetch_one(&self.pool)
        .await?;

        Ok(video)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Video>> {
        let video: Option<Video> =
            sqlx::query_as(&format!("SELECT {VIDEO_COLUMNS} FROM videos WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(video)
    }

    /// Detail read with owner snapshot.
    pub async fn get_with_owner(&self, id: Uuid) -> Result<Option<VideoWithOwner>> {
        let video: Option<VideoWithOwner> = sqlx::query_as(
            r#"
            SELECT v.id, v.owner_id, v.title, v.description, v.video_url,
                   v.thumbnail_url, v.duration_secs, v.views, v.is_published, v.created_at,
                   u.username AS owner_username, u.full_name AS owner_full_name,
                   u.avatar_url AS owner_avatar_url
            FROM videos v
            INNER JOIN users u ON u.id = v.owner_id
            WHERE v.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(video)
    }

    /// Paginated catalog listing. The sort column comes from the
    /// `VideoSort` allow-list, never from raw client input.
    pub async fn list(&self, query: &VideoListQuery) -> Result<Vec<VideoWithOwner>> {
        let order = format!(
            "{} {}",
            query.sort.column(),
            if query.ascending { "ASC" } else { "DESC" }
        );

        let sql = format!(
            r#"
            SELECT v.id, v.owner_id, v.title, v.description, v.video_url,
                   v.thumbnail_url, v.duration_secs, v.views, v.is_published, v.created_at,
                   u.username AS owner_username, u.full_name AS owner_full_name,
                   u.avatar_url AS owner_avatar_url
            FROM videos v
            INNER JOIN users u ON u.id = v.owner_id
            WHERE (v.is_published OR v.owner_id = $1)
              AND ($2::uuid IS NULL OR v.owner_id = $2)
              AND ($3::text IS NULL OR v.title ILIKE '%' || $3 || '%'
                                    OR v.description ILIKE '%' || $3 || '%')
            ORDER BY {order}
            LIMIT $4 OFFSET $5
            "#
        );

        let videos: Vec<VideoWithOwner> = sqlx::query_as(&sql)
            .bind(query.viewer_id)
            .bind(query.owner_id)
            .bind(&query.text)
            .bind(query.limit)
            .bind(query.offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(videos)
    }

    /// Update metadata; `None` keeps the current value.
    pub async fn update_metadata(
        &self,
        id: Uuid,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<Option<Video>> {
        let updated: Option<Video> = sqlx::query_as(&format!(
            r#"
            UPDATE videos SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {VIDEO_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(title)
        .bind(description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Swap the thumbnail asset reference.
    pub async fn update_thumbnail(
        &self,
        id: Uuid,
        url: &str,
        asset_id: &str,
    ) -> Result<Option<Video>> {
        let updated: Option<Video> = sqlx::query_as(&format!(
            r#"
            UPDATE videos SET thumbnail_url = $2, thumbnail_asset_id = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING {VIDEO_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(url)
        .bind(asset_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn toggle_publish(&self, id: Uuid) -> Result<Option<Video>> {
        let updated: Option<Video> = sqlx::query_as(&format!(
            r#"
            UPDATE videos SET is_published = NOT is_published, updated_at = NOW()
            WHERE id = $1
            RETURNING {VIDEO_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Count a view and bump the caller's watch history in one round trip
    /// per statement; the view counter update is atomic in the store.
    pub async fn record_view(&self, video_id: Uuid, viewer_id: Uuid) -> Result<()> {
        sqlx::query("UPDATE videos SET views = views + 1 WHERE id = $1")
            .bind(video_id)
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO watch_history (user_id, video_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, video_id) DO UPDATE SET watched_at = NOW()
            "#,
        )
        .bind(viewer_id)
        .bind(video_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_sort_allow_list() {
        assert_eq!(VideoSort::parse("created_at"), Some(VideoSort::CreatedAt));
        assert_eq!(VideoSort::parse("views"), Some(VideoSort::Views));
        assert_eq!(VideoSort::parse("duration"), Some(VideoSort::Duration));
        // Arbitrary column names never reach the query
        assert_eq!(VideoSort::parse("owner_id; DROP TABLE videos"), None);
    }
}
