//! Shared utilities, configuration, and error handling for StreamHub
//!
//! This crate provides common functionality used across the StreamHub application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Request extractors (validated JSON, pagination)
//! - Ownership-based authorization primitives

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod ownership;

pub use config::Config;
pub use db::map_unique_violation;
pub use error::{Error, Result};
pub use extractors::{Pagination, ValidatedJson};
pub use ownership::{ensure_owner, is_owner, Owned};
