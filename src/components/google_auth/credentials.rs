use crate::error::{google_auth_error, RelayResult};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// The fields of a Google service account key file the relay needs
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl ServiceAccountKey {
    /// Parse a key from its JSON text
    pub fn from_json(json: &str) -> RelayResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| google_auth_error(&format!("Invalid service account key: {}", e)))
    }

    /// Read and parse the key file
    pub async fn from_file(path: &Path) -> RelayResult<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            google_auth_error(&format!(
                "Failed to read credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }
}
