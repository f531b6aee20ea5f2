use secrecy::SecretString;
use serde::Deserialize;

/// Secret shared with the session-validation service that mints the
/// tokens this backend verifies.
#[derive(Debug, Deserialize)]
pub struct JwtSettings {
    pub secret: SecretString,
}

impl JwtSettings {
    pub fn new(secret: String) -> Self {
        Self {
            secret: SecretString::new(secret.into_boxed_str()),
        }
    }
}
