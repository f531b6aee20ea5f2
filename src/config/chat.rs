use secrecy::SecretString;
use serde::Deserialize;

/// Settings for the real-time chat backend that mirrors user avatars.
#[derive(Debug, Deserialize, Clone)]
pub struct ChatSettings {
    pub api_url: String,
    pub api_key: SecretString,
}
