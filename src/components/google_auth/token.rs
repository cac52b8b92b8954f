use super::credentials::ServiceAccountKey;
use super::AccessTokenProvider;
use crate::error::{google_auth_error, RelayResult};
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
/// Lifetime of the signed assertion, the maximum Google accepts
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Claims of the service account assertion
#[derive(Debug, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchanges service account assertions for access tokens.
///
/// The key file is read on every call and tokens are never kept, so rotating
/// the key on disk takes effect on the next request.
#[derive(Clone)]
pub struct TokenManager {
    credentials_path: PathBuf,
    client: Client,
}

impl TokenManager {
    pub fn new(credentials_path: PathBuf, client: Client) -> Self {
        Self {
            credentials_path,
            client,
        }
    }

    /// Sign the RS256 assertion for `scope`
    pub fn sign_assertion(key: &ServiceAccountKey, scope: &str) -> RelayResult<String> {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: key.client_email.clone(),
            scope: scope.to_string(),
            aud: key.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = key.private_key_id.clone();

        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| google_auth_error(&format!("Invalid private key: {}", e)))?;

        encode(&header, &claims, &encoding_key)
            .map_err(|e| google_auth_error(&format!("Failed to sign assertion: {}", e)))
    }

    /// Exchange a signed assertion at the key's token endpoint
    async fn exchange(&self, key: &ServiceAccountKey, assertion: String) -> RelayResult<String> {
        let params = [("grant_type", JWT_BEARER_GRANT.to_string()), ("assertion", assertion)];

        let response = self
            .client
            .post(&key.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| google_auth_error(&format!("Failed to request token: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_auth_error(&format!(
                "Failed to get token: HTTP {} - {}",
                status, error_body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| google_auth_error(&format!("Failed to parse token response: {}", e)))?;

        Ok(token.access_token)
    }
}

#[async_trait]
impl AccessTokenProvider for TokenManager {
    async fn access_token(&self, scope: &str) -> RelayResult<String> {
        let key = ServiceAccountKey::from_file(&self.credentials_path).await?;
        debug!("Requesting access token for {} ({})", key.client_email, scope);

        let assertion = Self::sign_assertion(&key, scope)?;
        self.exchange(&key, assertion).await
    }
}
