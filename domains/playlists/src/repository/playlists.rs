//! Playlist repository

use crate::domain::entities::{Playlist, PlaylistVideo};
use streamhub_common::{map_unique_violation, Error, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct PlaylistRepository {
    pool: PgPool,
}

impl PlaylistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, owner_id: Uuid, name: &str, description: &str) -> Result<Playlist> {
        let playlist: Playlist = sqlx::query_as(
            r#"
            INSERT INTO playlists (owner_id, name, description)
            VALUES ($1, $2, $3)
            RETURNING id, owner_id, name, description, created_at, updated_at
            "#,
        )
        .bind(owner_id)
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(playlist)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Playlist>> {
        let playlist: Option<Playlist> = sqlx::query_as(
            r#"
            SELECT id, owner_id, name, description, created_at, updated_at
            FROM playlists
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(playlist)
    }

    pub async fn list_for_user(&self, owner_id: Uuid) -> Result<Vec<Playlist>> {
        let playlists: Vec<Playlist> = sqlx::query_as(
            r#"
            SELECT id, owner_id, name, description, created_at, updated_at
            FROM playlists
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(playlists)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Option<Playlist>> {
        let updated: Option<Playlist> = sqlx::query_as(
            r#"
            UPDATE playlists SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, owner_id, name, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM playlists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Videos inside a playlist, in insertion order.
    pub async fn videos(&self, playlist_id: Uuid) -> Result<Vec<PlaylistVideo>> {
        let videos: Vec<PlaylistVideo> = sqlx::query_as(
            r#"
            SELECT v.id AS video_id, v.title, v.thumbnail_url, v.duration_secs,
                   v.views, v.owner_id, pv.added_at
            FROM playlist_videos pv
            INNER JOIN videos v ON v.id = pv.video_id
            WHERE pv.playlist_id = $1
            ORDER BY pv.added_at ASC
            "#,
        )
        .bind(playlist_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(videos)
    }

    /// Add a video. Duplicate adds are `Conflict`; a missing video is
    /// `NotFound` (foreign-key violation).
    pub async fn add_video(&self, playlist_id: Uuid, video_id: Uuid) -> Result<()> {
        sqlx::query("INSERT INTO playlist_videos (playlist_id, video_id) VALUES ($1, $2)")
            .bind(playlist_id)
            .bind(video_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e {
                    if db_err.is_foreign_key_violation() {
                        return Error::NotFound("Video not found".to_string());
                    }
                }
                map_unique_violation(e, "Video is already in this playlist")
            })?;

        Ok(())
    }

    pub async fn remove_video(&self, playlist_id: Uuid, video_id: Uuid) -> Result<()> {
        let result =
            sqlx::query("DELETE FROM playlist_videos WHERE playlist_id = $1 AND video_id = $2")
                .bind(playlist_id)
                .bind(video_id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(
                "Video is not in this playlist".to_string(),
            ));
        }

        Ok(())
    }
}
