//! Users domain entities

use chrono::{DateTime, Utc};
use serde::Serialize;
use streamhub_auth::AuthIdentity;
use uuid::Uuid;

/// Full user row, including credential fields.
///
/// Never serialized directly: API responses go through `to_identity()`,
/// which carries neither `password_hash` nor `refresh_token`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub avatar_url: Option<String>,
    pub avatar_asset_id: Option<String>,
    pub cover_image_url: Option<String>,
    pub cover_image_asset_id: Option<String>,
    /// The currently valid refresh token, or NULL when logged out
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The stripped view exposed to handlers and responses.
    pub fn to_identity(&self) -> AuthIdentity {
        AuthIdentity {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            avatar_url: self.avatar_url.clone(),
            cover_image_url: self.cover_image_url.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Public channel profile with subscription aggregates.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ChannelProfile {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub subscribers_count: i64,
    pub subscribed_to_count: i64,
    /// Whether the requesting user subscribes to this channel
    pub is_subscribed: bool,
}

/// One watch-history row joined with the video and its owner snapshot.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WatchHistoryEntry {
    pub video_id: Uuid,
    pub title: String,
    pub thumbnail_url: String,
    pub duration_secs: f64,
    pub views: i64,
    pub owner_id: Uuid,
    pub owner_username: String,
    pub owner_full_name: String,
    pub owner_avatar_url: Option<String>,
    pub watched_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_view_strips_secrets() {
        let user = User {
            id: Uuid::new_v4(),
            username: "ana".to_string(),
            email: "a@x.com".to_string(),
            full_name: "Ana".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            avatar_url: None,
            avatar_asset_id: None,
            cover_image_url: None,
            cover_image_asset_id: None,
            refresh_token: Some("token".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let view = user.to_identity();
        let json = serde_json::to_value(&view).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("password_hash"));
        assert!(!obj.contains_key("refresh_token"));
        assert_eq!(obj["username"], "ana");
    }
}
