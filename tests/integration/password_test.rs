//! Password hashing properties

use streamhub_auth::{hash_password, verify_password};

#[test]
fn test_hash_then_verify() {
    let hash = hash_password("correct horse battery staple").unwrap();
    assert!(verify_password("correct horse battery staple", &hash));
}

#[test]
fn test_wrong_password_rejected() {
    let hash = hash_password("correct horse battery staple").unwrap();
    assert!(!verify_password("incorrect horse", &hash));
}

#[test]
fn test_hashes_are_salted() {
    let a = hash_password("same-password").unwrap();
    let b = hash_password("same-password").unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_hash_is_phc_format() {
    let hash = hash_password("whatever").unwrap();
    assert!(hash.starts_with("$argon2"));
}

#[test]
fn test_malformed_hash_fails_closed() {
    assert!(!verify_password("anything", "not-a-phc-hash"));
}
