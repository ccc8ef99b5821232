//! User repository

use crate::domain::entities::{ChannelProfile, User};
use streamhub_common::{map_unique_violation, Result};
use sqlx::PgPool;
use uuid::Uuid;

const USER_COLUMNS: &str = r#"
    id, username, email, full_name, password_hash,
    avatar_url, avatar_asset_id, cover_image_url, cover_image_asset_id,
    refresh_token, created_at, updated_at
"#;

/// New user input; `password_hash` is the argon2 hash, never plaintext.
#[derive(Debug)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub avatar_url: Option<String>,
    pub cover_image_url: Option<String>,
}

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a user. Unique-index violations on username or email map to
    /// `Conflict` (backstop for the pre-insert existence check).
    pub async fn create(&self, new_user: NewUser) -> Result<User> {
        let user: User = sqlx::query_as(&format!(
            r#"
            INSERT INTO users (username, email, full_name, password_hash,
                               avatar_url, cover_image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.full_name)
        .bind(&new_user.password_hash)
        .bind(&new_user.avatar_url)
        .bind(&new_user.cover_image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "User with this username or email already exists"))?;

        Ok(user)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user: Option<User> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(user)
    }

    /// Find a user whose username or email equals `identifier` (case-folded).
    pub async fn find_by_login(&self, identifier: &str) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1 OR email = $1"
        ))
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Does a user with this username or email already exist?
    pub async fn exists(&self, username: &str, email: &str) -> Result<bool> {
        let found: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM users WHERE username = $1 OR email = $2")
                .bind(username)
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        Ok(found.is_some())
    }

    /// Overwrite the stored refresh token (login). Invalidates any
    /// previously issued refresh token for this user.
    pub async fn store_refresh_token(&self, user_id: Uuid, token: &str) -> Result<()> {
        sqlx::query("UPDATE users SET refresh_token = $2, updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Rotate the refresh token: succeeds only when the stored value still
    /// equals `presented`. Concurrent rotations with the same stale token
    /// race on this single conditional UPDATE — at most one wins.
    pub async fn rotate_refresh_token(
        &self,
        user_id: Uuid,
        presented: &str,
        replacement: &str,
    ) -> Result<bool> {
        let rotated: Option<(Uuid,)> = sqlx::query_as(
            r#"
            UPDATE users SET refresh_token = $3, updated_at = NOW()
            WHERE id = $1 AND refresh_token = $2
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(presented)
        .bind(replacement)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rotated.is_some())
    }

    /// Clear the stored refresh token (logout). Any outstanding refresh
    /// token stops working immediately regardless of its own expiry.
    pub async fn clear_refresh_token(&self, user_id: Uuid) -> Result<()> {
        sqlx::query("UPDATE users SET refresh_token = NULL, updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Replace the stored password hash
    pub async fn update_password_hash(&self, user_id: Uuid, password_hash: &str) -> Result<()> {
        sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Update profile fields; `None` keeps the current value.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        full_name: Option<String>,
        email: Option<String>,
    ) -> Result<Option<User>> {
        let updated: Option<User> = sqlx::query_as(&format!(
            r#"
            UPDATE users SET
                full_name = COALESCE($2, full_name),
                email = COALESCE($3, email),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(full_name)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Email already in use"))?;

        Ok(updated)
    }

    /// Swap the avatar asset reference
    pub async fn update_avatar(
        &self,
        user_id: Uuid,
        url: &str,
        asset_id: &str,
    ) -> Result<Option<User>> {
        let updated: Option<User> = sqlx::query_as(&format!(
            r#"
            UPDATE users SET avatar_url = $2, avatar_asset_id = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(url)
        .bind(asset_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Swap the cover image asset reference
    pub async fn update_cover_image(
        &self,
        user_id: Uuid,
        url: &str,
        asset_id: &str,
    ) -> Result<Option<User>> {
        let updated: Option<User> = sqlx::query_as(&format!(
            r#"
            UPDATE users SET cover_image_url = $2, cover_image_asset_id = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(url)
        .bind(asset_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Channel profile by username, with subscriber aggregates relative to
    /// the viewing user. Cross-domain read of the subscriptions table.
    pub async fn channel_profile(
        &self,
        username: &str,
        viewer_id: Uuid,
    ) -> Result<Option<ChannelProfile>> {
        let profile: Option<ChannelProfile> = sqlx::query_as(
            r#"
            SELECT u.id, u.username, u.full_name, u.email,
                   u.avatar_url, u.cover_image_url,
                   (SELECT COUNT(*) FROM subscriptions s
                     WHERE s.channel_id = u.id) AS subscribers_count,
                   (SELECT COUNT(*) FROM subscriptions s
                     WHERE s.subscriber_id = u.id) AS subscribed_to_count,
                   EXISTS (SELECT 1 FROM subscriptions s
                            WHERE s.channel_id = u.id
                              AND s.subscriber_id = $2) AS is_subscribed
            FROM users u
            WHERE u.username = $1
            "#,
        )
        .bind(username)
        .bind(viewer_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }
}
