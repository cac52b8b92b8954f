use crate::error::{upstream_error, RelayResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::error;

/// Create the HTTP client shared by all relays
pub fn create_client() -> Client {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Decode an upstream JSON body, turning any non-2xx status into an upstream error
pub async fn read_json<T: DeserializeOwned>(
    service: &'static str,
    response: Response,
) -> RelayResult<T> {
    read_json_accepting(service, response, |status| status.is_success()).await
}

/// Decode an upstream JSON body when `accept` allows the status. Anything else becomes
/// an upstream error carrying the status and the raw body text.
pub async fn read_json_accepting<T, F>(
    service: &'static str,
    response: Response,
    accept: F,
) -> RelayResult<T>
where
    T: DeserializeOwned,
    F: Fn(StatusCode) -> bool,
{
    let status = response.status();
    if !accept(status) {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response".to_string());
        error!("{} error: HTTP {} - {}", service, status, body);
        return Err(upstream_error(service, status.as_u16(), body));
    }

    Ok(response.json().await?)
}
