use crate::error::{validation_error, RelayResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name used when the caller does not give one
pub const DEFAULT_CUSTOMER_NAME: &str = "Test User";

/// Body of `POST /api/initiate-call`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    pub phone_number: Option<String>,
    pub name: Option<String>,
    /// Per-call values for the assistant's prompt template
    #[serde(default)]
    pub variables: Option<Map<String, Value>>,
}

/// The person Vapi should dial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub number: String,
    pub name: String,
}

/// Payload for Vapi's outbound phone call endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundCall {
    pub assistant_id: String,
    pub phone_number_id: String,
    pub customer: Customer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_overrides: Option<AssistantOverrides>,
}

/// Overrides applied to the assistant for a single call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantOverrides {
    pub variable_values: Map<String, Value>,
}

/// A validated call: who to dial and what to tell the assistant
#[derive(Debug, Clone, PartialEq)]
pub struct CallTarget {
    pub customer: Customer,
    pub overrides: Option<AssistantOverrides>,
}

impl CallRequest {
    /// Validate the request into the call to place.
    ///
    /// The default name only applies when `name` is absent; an empty name is sent as is.
    pub fn into_target(self) -> RelayResult<CallTarget> {
        let number = self
            .phone_number
            .filter(|number| !number.is_empty())
            .ok_or_else(|| validation_error("Phone number is required"))?;

        Ok(CallTarget {
            customer: Customer {
                number,
                name: self
                    .name
                    .unwrap_or_else(|| DEFAULT_CUSTOMER_NAME.to_string()),
            },
            overrides: self
                .variables
                .map(|variable_values| AssistantOverrides { variable_values }),
        })
    }
}
