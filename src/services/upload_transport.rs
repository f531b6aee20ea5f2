use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use crate::config::uploads::UploadSettings;
use crate::models::upload::FileRouterConfig;

#[derive(Debug, thiserror::Error)]
pub enum UploadTransportError {
    #[error("Upload transport request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Upload transport returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the external upload transport. File bytes never pass
/// through this backend; the transport stores them, enforces the
/// declared route constraints and calls back when an upload completes.
/// The only operation we drive ourselves is deletion by key.
#[derive(Clone, Debug)]
pub struct UploadTransportService {
    client: Client,
    api_url: String,
    api_key: SecretString,
    app_id: String,
    file_router: FileRouterConfig,
}

impl UploadTransportService {
    pub fn new(settings: UploadSettings) -> Self {
        Self {
            client: Client::new(),
            api_url: settings.api_url,
            api_key: settings.api_key,
            app_id: settings.app_id,
            file_router: FileRouterConfig::new(),
        }
    }

    /// Application identifier substituted into public file URLs.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// The declared per-route constraints the transport enforces.
    pub fn file_router(&self) -> &FileRouterConfig {
        &self.file_router
    }

    /// Delete a stored file by its deletion key.
    pub async fn delete_file(&self, key: &str) -> Result<(), UploadTransportError> {
        tracing::info!("Deleting file from upload transport: {}", key);

        let response = self.client
            .post(format!("{}/deleteFiles", self.api_url))
            .header("x-api-key", self.api_key.expose_secret())
            .json(&json!({ "file_keys": [key] }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UploadTransportError::Status(response.status()));
        }

        Ok(())
    }
}
