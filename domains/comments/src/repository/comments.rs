//! Comment repository

use crate::domain::entities::{Comment, CommentWithAuthor};
use sqlx::PgPool;
use streamhub_common::Result;
use uuid::Uuid;

const COMMENT_COLUMNS: &str = "id, video_id, owner_id, content, created_at, updated_at";

#[derive(Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, video_id: Uuid, owner_id: Uuid, content: &str) -> Result<Comment> {
        let comment: Comment = sqlx::query_as(&format!(
            r#"
            INSERT INTO comments (video_id, owner_id, content)
            VALUES ($1, $2, $3)
            RETURNING {COMMENT_COLUMNS}
            "#
        ))
        .bind(video_id)
        .bind(owner_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Comment>> {
        let comment: Option<Comment> = sqlx::query_as(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    /// Comments under a video, newest first, with author snapshots.
    pub async fn list_for_video(
        &self,
        video_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CommentWithAuthor>> {
        let comments: Vec<CommentWithAuthor> = sqlx::query_as(
            r#"
            SELECT c.id, c.video_id, c.owner_id, c.content, c.created_at, c.updated_at,
                   u.username AS author_username, u.avatar_url AS author_avatar_url
            FROM comments c
            INNER JOIN users u ON u.id = c.owner_id
            WHERE c.video_id = $1
            ORDER BY c.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(video_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    pub async fn update_content(&self, id: Uuid, content: &str) -> Result<Option<Comment>> {
        let updated: Option<Comment> = sqlx::query_as(&format!(
            r#"
            UPDATE comments SET content = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {COMMENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(content)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn video_exists(&self, video_id: Uuid) -> Result<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM videos WHERE id = $1)")
                .bind(video_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists.0)
    }
}
