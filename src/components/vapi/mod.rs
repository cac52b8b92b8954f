mod client;
pub mod models;

pub use client::VapiClient;
pub use models::{AssistantOverrides, CallRequest, CallTarget, Customer, OutboundCall};

use crate::error::RelayResult;
use async_trait::async_trait;
use serde_json::Value;

/// Voice-call provider the call relays forward to
#[async_trait]
pub trait CallProvider: Send + Sync + 'static {
    /// Start an outbound call to the target's customer, returning the provider's call object
    async fn initiate_call(&self, target: &CallTarget) -> RelayResult<Value>;

    /// List recent calls, newest first as the provider orders them
    async fn list_calls(&self, limit: u32) -> RelayResult<Value>;

    /// Fetch a single call by id
    async fn get_call(&self, call_id: &str) -> RelayResult<Value>;
}
