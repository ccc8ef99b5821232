//! StreamHub media service
//!
//! Proxies media files (videos, thumbnails, avatars, cover images) to a
//! third-party asset host. The core only ever stores the opaque asset id
//! and delivery URL returned from an upload; the host owns the bytes.
//!
//! Two providers:
//! - HTTP client against the asset host's REST API for production
//! - Mock provider for testing and development

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod http;
pub mod mock;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Media configuration error: {0}")]
    Configuration(String),

    #[error("Media validation error: {0}")]
    Validation(String),

    #[error("Asset host error: {0}")]
    AssetHost(String),
}

/// What kind of asset is being uploaded; the asset host uses this to pick
/// processing (video transcoding vs. image resizing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Video,
    Image,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Video => "video",
            AssetKind::Image => "image",
        }
    }
}

/// A stored asset reference: everything the core persists about a media file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAsset {
    /// Opaque id on the asset host, used for deletion
    pub asset_id: String,
    /// Public delivery URL
    pub url: String,
    /// Duration in seconds, present for video assets
    pub duration_secs: Option<f64>,
    pub uploaded_at: DateTime<Utc>,
}

/// Media service trait for uploading and deleting assets.
#[async_trait::async_trait]
pub trait MediaService: Send + Sync {
    /// Upload raw bytes, returning the stored asset reference.
    async fn upload(
        &self,
        kind: AssetKind,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaAsset, MediaError>;

    /// Delete an asset by its opaque id.
    ///
    /// Callers treat deletion as best-effort cleanup; a failure must not
    /// fail the surrounding request.
    async fn delete(&self, asset_id: &str) -> Result<(), MediaError>;
}

/// Media service configuration
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Provider (http, mock)
    pub provider: String,
    /// Asset host API base URL
    pub api_base_url: Option<String>,
    /// Asset host API key
    pub api_key: Option<String>,
}

impl MediaConfig {
    /// Create media config from environment variables
    pub fn from_env() -> Result<Self, MediaError> {
        dotenvy::dotenv().ok();

        let provider = std::env::var("MEDIA_PROVIDER").unwrap_or_else(|_| "mock".to_string());

        Ok(Self {
            provider,
            api_base_url: std::env::var("MEDIA_API_BASE_URL").ok(),
            api_key: std::env::var("MEDIA_API_KEY").ok(),
        })
    }
}

/// Factory for constructing the configured media service
pub struct MediaServiceFactory;

impl MediaServiceFactory {
    pub fn create(config: MediaConfig) -> Result<Box<dyn MediaService>, MediaError> {
        match config.provider.as_str() {
            "http" => {
                let base_url = config.api_base_url.clone().ok_or_else(|| {
                    MediaError::Configuration(
                        "MEDIA_API_BASE_URL is required for the http provider".to_string(),
                    )
                })?;
                let api_key = config.api_key.clone().ok_or_else(|| {
                    MediaError::Configuration(
                        "MEDIA_API_KEY is required for the http provider".to_string(),
                    )
                })?;
                Ok(Box::new(http::HttpMediaService::new(base_url, api_key)))
            }
            "mock" => Ok(Box::new(mock::MockMediaService::new())),
            other => Err(MediaError::Configuration(format!(
                "Unknown media provider: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_rejects_unknown_provider() {
        let config = MediaConfig {
            provider: "carrier-pigeon".to_string(),
            api_base_url: None,
            api_key: None,
        };
        assert!(MediaServiceFactory::create(config).is_err());
    }

    #[test]
    fn test_factory_http_requires_base_url_and_key() {
        let config = MediaConfig {
            provider: "http".to_string(),
            api_base_url: None,
            api_key: Some("key".to_string()),
        };
        assert!(MediaServiceFactory::create(config).is_err());

        let config = MediaConfig {
            provider: "http".to_string(),
            api_base_url: Some("https://assets.example.com".to_string()),
            api_key: None,
        };
        assert!(MediaServiceFactory::create(config).is_err());
    }

    #[test]
    fn test_factory_builds_mock() {
        let config = MediaConfig {
            provider: "mock".to_string(),
            api_base_url: None,
            api_key: None,
        };
        assert!(MediaServiceFactory::create(config).is_ok());
    }
}
