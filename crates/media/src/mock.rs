//! Mock media service implementation
//!
//! Captures uploads in memory for testing without an asset host.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::{AssetKind, MediaAsset, MediaError, MediaService};

/// Upload captured by the mock service
#[derive(Debug, Clone)]
pub struct CapturedUpload {
    pub asset_id: String,
    pub kind: AssetKind,
    pub filename: String,
    pub size_bytes: usize,
}

/// In-memory media service for tests and local development.
#[derive(Clone, Default)]
pub struct MockMediaService {
    uploads: Arc<Mutex<Vec<CapturedUpload>>>,
    deleted: Arc<Mutex<Vec<String>>>,
}

impl MockMediaService {
    pub fn new() -> Self {
        Self::default()
    }

    /// All uploads captured so far
    pub fn uploads(&self) -> Vec<CapturedUpload> {
        self.uploads.lock().unwrap().clone()
    }

    /// All asset ids deleted so far
    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MediaService for MockMediaService {
    async fn upload(
        &self,
        kind: AssetKind,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaAsset, MediaError> {
        if bytes.is_empty() {
            return Err(MediaError::Validation("Empty upload".to_string()));
        }

        let asset_id = format!("mock-{}", Uuid::new_v4());
        self.uploads.lock().unwrap().push(CapturedUpload {
            asset_id: asset_id.clone(),
            kind,
            filename: filename.to_string(),
            size_bytes: bytes.len(),
        });

        Ok(MediaAsset {
            url: format!("https://assets.mock.local/{}/{}", kind.as_str(), asset_id),
            asset_id,
            duration_secs: match kind {
                AssetKind::Video => Some(0.0),
                AssetKind::Image => None,
            },
            uploaded_at: Utc::now(),
        })
    }

    async fn delete(&self, asset_id: &str) -> Result<(), MediaError> {
        self.deleted.lock().unwrap().push(asset_id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_captures_uploads_and_deletes() {
        let service = MockMediaService::new();

        let asset = service
            .upload(AssetKind::Image, "avatar.png", vec![1, 2, 3])
            .await
            .unwrap();
        assert!(asset.url.contains(&asset.asset_id));
        assert!(asset.duration_secs.is_none());

        service.delete(&asset.asset_id).await.unwrap();

        let uploads = service.uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].filename, "avatar.png");
        assert_eq!(uploads[0].size_bytes, 3);
        assert_eq!(service.deleted(), vec![asset.asset_id]);
    }

    #[tokio::test]
    async fn test_mock_rejects_empty_upload() {
        let service = MockMediaService::new();
        let result = service.upload(AssetKind::Video, "clip.mp4", vec![]).await;
        assert!(matches!(result, Err(MediaError::Validation(_))));
    }
}
