//! Identity read-model types
//!
//! Lightweight view of the `users` row with the secret fields
//! (`password_hash`, `refresh_token`) never selected in the first place.
//! Handlers needing the full user row load it from the users domain
//! repository.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Authenticated identity as seen by handlers and API responses.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
