//! Tweet repository

use crate::domain::entities::Tweet;
use sqlx::PgPool;
use streamhub_common::Result;
use uuid::Uuid;

const TWEET_COLUMNS: &str = "id, owner_id, content, created_at, updated_at";

#[derive(Clone)]
pub struct TweetRepository {
    pool: PgPool,
}

impl TweetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, owner_id: Uuid, content: &str) -> Result<Tweet> {
        let tweet: Tweet = sqlx::query_as(&format!(
            r#"
            INSERT INTO tweets (owner_id, content)
            VALUES ($1, $2)
            RETURNING {TWEET_COLUMNS}
            "#
        ))
        .bind(owner_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(tweet)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Tweet>> {
        let tweet: Option<Tweet> = sqlx::query_as(&format!(
            "SELECT {TWEET_COLUMNS} FROM tweets WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tweet)
    }

    pub async fn list_for_user(
        &self,
        owner_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Tweet>> {
        let tweets: Vec<Tweet> = sqlx::query_as(&format!(
            r#"
            SELECT {TWEET_COLUMNS} FROM tweets
            WHERE owner_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(owner_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(tweets)
    }

    pub async fn update_content(&self, id: Uuid, content: &str) -> Result<Option<Tweet>> {
        let updated: Option<Tweet> = sqlx::query_as(&format!(
            r#"
            UPDATE tweets SET content = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {TWEET_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(content)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM tweets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
