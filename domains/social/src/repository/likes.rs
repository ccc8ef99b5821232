//! Like repository
//!
//! A like row points at exactly one of a video, a comment, or a tweet.
//! Toggling deletes the existing row if there is one, otherwise inserts.

use crate::domain::entities::LikedVideo;
use sqlx::PgPool;
use streamhub_common::{Error, Result};
use uuid::Uuid;

/// Likeable target kinds. `column()` is the fixed column list for each
/// kind, never client input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTarget {
    Video,
    Comment,
    Tweet,
}

impl LikeTarget {
    fn column(self) -> &'static str {
        match self {
            LikeTarget::Video => "video_id",
            LikeTarget::Comment => "comment_id",
            LikeTarget::Tweet => "tweet_id",
        }
    }

    fn table(self) -> &'static str {
        match self {
            LikeTarget::Video => "videos",
            LikeTarget::Comment => "comments",
            LikeTarget::Tweet => "tweets",
        }
    }

    fn label(self) -> &'static str {
        match self {
            LikeTarget::Video => "Video",
            LikeTarget::Comment => "Comment",
            LikeTarget::Tweet => "Tweet",
        }
    }
}

#[derive(Clone)]
pub struct LikeRepository {
    pool: PgPool,
}

impl LikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Toggle a like. Returns `true` if the target is now liked by the
    /// user, `false` if the like was removed.
    pub async fn toggle(&self, target: LikeTarget, user_id: Uuid, target_id: Uuid) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as(&format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1)",
            target.table()
        ))
        .bind(target_id)
        .fetch_one(&self.pool)
        .await?;

        if !exists.0 {
            return Err(Error::NotFound(format!("{} not found", target.label())));
        }

        let deleted = sqlx::query(&format!(
            "DELETE FROM likes WHERE user_id = $1 AND {} = $2",
            target.column()
        ))
        .bind(user_id)
        .bind(target_id)
        .execute(&self.pool)
        .await?;

        if deleted.rows_affected() > 0 {
            return Ok(false);
        }

        // Concurrent double-toggle hits the partial unique index; treat
        // it as already liked.
        sqlx::query(&format!(
            "INSERT INTO likes (user_id, {}) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            target.column()
        ))
        .bind(user_id)
        .bind(target_id)
        .execute(&self.pool)
        .await?;

        Ok(true)
    }

    /// Videos the user has liked, newest like first.
    pub async fn liked_videos(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<LikedVideo>> {
        let videos: Vec<LikedVideo> = sqlx::query_as(
            r#"
            SELECT v.id AS video_id, v.title, v.thumbnail_url, v.duration_secs,
                   v.views, v.owner_id, u.username AS owner_username,
                   l.created_at AS liked_at
            FROM likes l
            INNER JOIN videos v ON v.id = l.video_id
            INNER JOIN users u ON u.id = v.owner_id
            WHERE l.user_id = $1 AND l.video_id IS NOT NULL
            ORDER BY l.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(videos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_columns_are_fixed() {
        assert_eq!(LikeTarget::Video.column(), "video_id");
        assert_eq!(LikeTarget::Comment.column(), "comment_id");
        assert_eq!(LikeTarget::Tweet.column(), "tweet_id");
    }

    #[test]
    fn target_tables_match_columns() {
        assert_eq!(LikeTarget::Video.table(), "videos");
        assert_eq!(LikeTarget::Comment.table(), "comments");
        assert_eq!(LikeTarget::Tweet.table(), "tweets");
    }
}
