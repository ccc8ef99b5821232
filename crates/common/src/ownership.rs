//! Ownership-based authorization
//!
//! Every mutable resource in StreamHub (videos, playlists, comments, tweets)
//! is owned by exactly one user. There are no roles, groups, or shared
//! ownership: mutation rights are an exact equality check between the
//! resource's stored owner id and the caller's identity id.

use uuid::Uuid;

use crate::error::{Error, Result};

/// A resource with a single owning user.
pub trait Owned {
    fn owner_id(&self) -> Uuid;
}

/// Check whether `caller` owns `resource`.
pub fn is_owner<T: Owned>(resource: &T, caller: Uuid) -> bool {
    resource.owner_id() == caller
}

/// Fail with `Forbidden` unless `caller` owns `resource`.
///
/// Mutating handlers call this before touching the store.
pub fn ensure_owner<T: Owned>(resource: &T, caller: Uuid) -> Result<()> {
    if is_owner(resource, caller) {
        Ok(())
    } else {
        Err(Error::Forbidden(
            "Only the owner may modify this resource".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    struct Doc {
        owner: Uuid,
    }

    impl Owned for Doc {
        fn owner_id(&self) -> Uuid {
            self.owner
        }
    }

    #[test]
    fn test_owner_passes() {
        let owner = Uuid::new_v4();
        let doc = Doc { owner };
        assert!(is_owner(&doc, owner));
        assert!(ensure_owner(&doc, owner).is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let doc = Doc {
            owner: Uuid::new_v4(),
        };
        let stranger = Uuid::new_v4();
        assert!(!is_owner(&doc, stranger));

        let err = ensure_owner(&doc, stranger).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }
}
