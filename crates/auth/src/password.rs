//! Password hashing
//!
//! Argon2id with a random per-password salt. Stored hashes use the PHC
//! string format, so parameters travel with the hash and can be tuned
//! without invalidating existing credentials. Plaintext passwords never
//! reach the store.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AuthError;

/// Hash a password with a freshly generated salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            AuthError::PasswordHash
        })
}

/// Verify a password against a stored PHC-format hash.
///
/// A malformed stored hash is treated as a verification failure rather than
/// an error; either way the caller fails closed.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash is malformed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("pw123456").unwrap();
        assert!(verify_password("pw123456", &hash));
        assert!(!verify_password("wrong-password", &hash));
    }

    #[test]
    fn test_hash_never_stores_plaintext() {
        let hash = hash_password("pw123456").unwrap();
        assert!(!hash.contains("pw123456"));
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // Per-password random salt
        let a = hash_password("pw123456").unwrap();
        let b = hash_password("pw123456").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_stored_hash_fails_closed() {
        assert!(!verify_password("pw123456", "not-a-phc-hash"));
        assert!(!verify_password("pw123456", ""));
    }
}
