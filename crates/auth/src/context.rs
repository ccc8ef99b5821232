//! Authenticated request context

use uuid::Uuid;

use crate::types::AuthIdentity;

/// Represents an authenticated user context.
///
/// Produced only by the `AuthUser` extractor, so a handler holding one is
/// guaranteed to have a resolved, store-backed identity.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub identity: AuthIdentity,
}

impl AuthContext {
    pub fn new(identity: AuthIdentity) -> Self {
        Self { identity }
    }

    /// The caller's user id.
    pub fn user_id(&self) -> Uuid {
        self.identity.id
    }

    /// Check whether the caller owns a resource with the given owner id.
    pub fn owns(&self, owner_id: Uuid) -> bool {
        self.identity.id == owner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn identity(id: Uuid) -> AuthIdentity {
        AuthIdentity {
            id,
            username: "ana".to_string(),
            email: "a@x.com".to_string(),
            full_name: "Ana".to_string(),
            avatar_url: None,
            cover_image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_owns_is_exact_id_equality() {
        let id = Uuid::new_v4();
        let ctx = AuthContext::new(identity(id));
        assert!(ctx.owns(id));
        assert!(!ctx.owns(Uuid::new_v4()));
        assert_eq!(ctx.user_id(), id);
    }
}
