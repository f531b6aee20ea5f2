use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use uuid::Uuid;

use crate::config::chat::ChatSettings;

#[derive(Debug, thiserror::Error)]
pub enum ChatServiceError {
    #[error("Chat service request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Chat service returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the real-time chat backend. User profiles live there as
/// well, so avatar changes are mirrored into the chat user's `image`
/// field via a partial update.
#[derive(Clone, Debug)]
pub struct ChatService {
    client: Client,
    api_url: String,
    api_key: SecretString,
}

impl ChatService {
    pub fn new(settings: ChatSettings) -> Self {
        Self {
            client: Client::new(),
            api_url: settings.api_url,
            api_key: settings.api_key,
        }
    }

    /// Partially update a chat user record, setting only the `image` field.
    pub async fn partial_update_user_image(
        &self,
        user_id: Uuid,
        image_url: &str,
    ) -> Result<(), ChatServiceError> {
        tracing::info!("Updating chat profile image for user {}", user_id);

        let response = self.client
            .patch(format!("{}/users/{}", self.api_url, user_id))
            .bearer_auth(self.api_key.expose_secret())
            .json(&json!({ "set": { "image": image_url } }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ChatServiceError::Status(response.status()));
        }

        Ok(())
    }
}
