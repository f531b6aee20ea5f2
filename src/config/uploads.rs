use secrecy::SecretString;
use serde::Deserialize;

/// Settings for the external upload transport (storage, constraint
/// enforcement and upload-complete callbacks happen on its side).
#[derive(Debug, Deserialize, Clone)]
pub struct UploadSettings {
    /// Application identifier substituted into public file URLs.
    pub app_id: String,
    /// Base URL of the transport's REST API (deletion endpoint).
    pub api_url: String,
    pub api_key: SecretString,
}
