use super::models::{CallTarget, OutboundCall};
use super::CallProvider;
use crate::config::VapiConfig;
use crate::error::{config_error, other_error, RelayResult};
use crate::utils::http::read_json_accepting;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

const SERVICE: &str = "Vapi";

/// REST client for the Vapi voice platform
#[derive(Clone)]
pub struct VapiClient {
    config: VapiConfig,
    client: Client,
}

impl VapiClient {
    pub fn new(config: VapiConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Build `{base_url}/{segments...}` with each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> RelayResult<Url> {
        let mut url = Url::parse(&self.config.base_url)?;
        url.path_segments_mut()
            .map_err(|_| other_error("Vapi base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn api_key(&self) -> RelayResult<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| config_error("Server misconfiguration: Missing VAPI_API_KEY"))
    }
}

#[async_trait]
impl CallProvider for VapiClient {
    async fn initiate_call(&self, target: &CallTarget) -> RelayResult<Value> {
        let (api_key, assistant_id, phone_number_id) = match (
            self.config.api_key.as_deref(),
            self.config.assistant_id.as_deref(),
            self.config.phone_number_id.as_deref(),
        ) {
            (Some(key), Some(assistant), Some(phone)) => (key, assistant, phone),
            (key, assistant, phone) => {
                warn!(
                    "Missing Vapi env vars - API_KEY: {}, ASSISTANT_ID: {}, PHONE_NUMBER_ID: {}",
                    key.is_some(),
                    assistant.is_some(),
                    phone.is_some()
                );
                return Err(config_error(
                    "Server misconfiguration: Missing Vapi env vars",
                ));
            }
        };

        let payload = OutboundCall {
            assistant_id: assistant_id.to_string(),
            phone_number_id: phone_number_id.to_string(),
            customer: target.customer.clone(),
            assistant_overrides: target.overrides.clone(),
        };

        info!("Initiating call to {}...", target.customer.number);
        let response = self
            .client
            .post(self.endpoint(&["call", "phone"])?)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        info!("Vapi responded with {}", response.status());
        read_json_accepting(SERVICE, response, |status| {
            status == StatusCode::OK || status == StatusCode::CREATED
        })
        .await
    }

    async fn list_calls(&self, limit: u32) -> RelayResult<Value> {
        let api_key = self.api_key()?;

        let mut url = self.endpoint(&["call"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());

        info!("Fetching calls from Vapi (limit={})...", limit);
        let response = self.client.get(url).bearer_auth(api_key).send().await?;

        read_json_accepting(SERVICE, response, |status| status == StatusCode::OK).await
    }

    async fn get_call(&self, call_id: &str) -> RelayResult<Value> {
        let api_key = self.api_key()?;

        info!("Fetching call {} from Vapi...", call_id);
        let response = self
            .client
            .get(self.endpoint(&["call", call_id])?)
            .bearer_auth(api_key)
            .send()
            .await?;

        read_json_accepting(SERVICE, response, |status| status == StatusCode::OK).await
    }
}
