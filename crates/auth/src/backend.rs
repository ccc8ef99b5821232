//! Concrete authentication backend
//!
//! Wraps `PgPool` + `AuthConfig` and owns the identity lookup used by the
//! session middleware. Uses runtime `sqlx::query_as` so the identity read
//! model stays decoupled from the users domain's full row type.

use sqlx::PgPool;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::verify_access_token;
use crate::types::AuthIdentity;

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    pool: PgPool,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(pool: PgPool, config: AuthConfig) -> Self {
        Self { pool, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Find identity by ID — lightweight read model, secrets never selected.
    pub async fn find_identity(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError> {
        let identity: Option<AuthIdentity> = sqlx::query_as(
            r#"
            SELECT id, username, email, full_name, avatar_url, cover_image_url,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %id, "Failed to load user");
            AuthError::UserLoadError
        })?;

        Ok(identity)
    }

    /// Authenticate an access token: verify signature and expiry, then
    /// resolve the identity. A token whose user no longer exists is rejected.
    pub async fn authenticate(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = verify_access_token(&self.config, token)?;

        let identity = self
            .find_identity(claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(AuthContext::new(identity))
    }
}
