//! HTTP asset host client

use chrono::Utc;
use serde::Deserialize;

use crate::{AssetKind, MediaAsset, MediaError, MediaService};

/// Response from the asset host's upload endpoint
#[derive(Debug, Deserialize)]
struct UploadResponse {
    asset_id: String,
    url: String,
    duration_secs: Option<f64>,
}

/// HTTP client for the asset host's REST API.
pub struct HttpMediaService {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpMediaService {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl MediaService for HttpMediaService {
    async fn upload(
        &self,
        kind: AssetKind,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaAsset, MediaError> {
        if bytes.is_empty() {
            return Err(MediaError::Validation("Empty upload".to_string()));
        }

        let size = bytes.len();
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new()
            .text("kind", kind.as_str())
            .part("file", part);

        let response = self
            .client
            .post(format!("{}/v1/assets", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::AssetHost(format!("Upload request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::AssetHost(format!(
                "Upload rejected with {}: {}",
                status, body
            )));
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| MediaError::AssetHost(format!("Malformed upload response: {}", e)))?;

        tracing::info!(
            asset_id = %uploaded.asset_id,
            kind = kind.as_str(),
            size_bytes = size,
            "Asset uploaded"
        );

        Ok(MediaAsset {
            asset_id: uploaded.asset_id,
            url: uploaded.url,
            duration_secs: uploaded.duration_secs,
            uploaded_at: Utc::now(),
        })
    }

    async fn delete(&self, asset_id: &str) -> Result<(), MediaError> {
        let response = self
            .client
            .delete(format!("{}/v1/assets/{}", self.base_url, asset_id))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| MediaError::AssetHost(format!("Delete request failed: {}", e)))?;

        // The host treats deleting a missing asset as success
        if !response.status().is_success() && response.status() != reqwest::StatusCode::NOT_FOUND {
            return Err(MediaError::AssetHost(format!(
                "Delete rejected with {}",
                response.status()
            )));
        }

        tracing::info!(asset_id = %asset_id, "Asset deleted");
        Ok(())
    }
}
