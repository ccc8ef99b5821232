//! Subscription repository

use crate::domain::entities::{SubscribedChannel, Subscriber};
use sqlx::PgPool;
use streamhub_common::{Error, Result};
use uuid::Uuid;

#[derive(Clone)]
pub struct SubscriptionRepository {
    pool: PgPool,
}

impl SubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Toggle a subscription. Returns `true` if the caller is now
    /// subscribed to the channel, `false` if the subscription was removed.
    pub async fn toggle(&self, subscriber_id: Uuid, channel_id: Uuid) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(channel_id)
            .fetch_one(&self.pool)
            .await?;

        if !exists.0 {
            return Err(Error::NotFound("Channel does not exist".to_string()));
        }

        let deleted = sqlx::query(
            "DELETE FROM subscriptions WHERE subscriber_id = $1 AND channel_id = $2",
        )
        .bind(subscriber_id)
        .bind(channel_id)
        .execute(&self.pool)
        .await?;

        if deleted.rows_affected() > 0 {
            return Ok(false);
        }

        sqlx::query(
            r#"
            INSERT INTO subscriptions (subscriber_id, channel_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(subscriber_id)
        .bind(channel_id)
        .execute(&self.pool)
        .await?;

        Ok(true)
    }

    /// Users subscribed to a channel, newest first.
    pub async fn subscribers(
        &self,
        channel_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Subscriber>> {
        let subscribers: Vec<Subscriber> = sqlx::query_as(
            r#"
            SELECT u.id AS user_id, u.username, u.full_name, u.avatar_url,
                   s.created_at AS subscribed_at
            FROM subscriptions s
            INNER JOIN users u ON u.id = s.subscriber_id
            WHERE s.channel_id = $1
            ORDER BY s.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(channel_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(subscribers)
    }

    /// Channels the user is subscribed to, newest first.
    pub async fn subscribed_channels(
        &self,
        subscriber_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SubscribedChannel>> {
        let channels: Vec<SubscribedChannel> = sqlx::query_as(
            r#"
            SELECT u.id AS channel_id, u.username, u.full_name, u.avatar_url,
                   s.created_at AS subscribed_at
            FROM subscriptions s
            INNER JOIN users u ON u.id = s.channel_id
            WHERE s.subscriber_id = $1
            ORDER BY s.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(subscriber_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(channels)
    }
}
