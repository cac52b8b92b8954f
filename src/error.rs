use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use miette::Diagnostic;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Main error type for the relay
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{0}")]
    #[diagnostic(code(relay::validation))]
    Validation(String),

    #[error("{0}")]
    #[diagnostic(code(relay::configuration))]
    Configuration(String),

    #[error("{service} returned HTTP {status}: {body}")]
    #[diagnostic(code(relay::upstream))]
    Upstream {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("Environment error: {0}")]
    #[diagnostic(code(relay::environment), help("set it in the environment or in .env"))]
    Environment(String),

    #[error("Google authentication error: {0}")]
    #[diagnostic(code(relay::google_auth))]
    GoogleAuth(String),

    #[error("HTTP client error: {0}")]
    #[diagnostic(code(relay::http))]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    #[diagnostic(code(relay::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(relay::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(relay::other))]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Other(format!("Invalid upstream URL: {}", err))
    }
}

impl Error {
    /// HTTP status the relay answers with for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            Error::Upstream { service, body, .. } => json!({
                "error": format!("{} Error", service),
                "details": body,
            }),
            other => json!({ "error": other.to_string() }),
        };

        error!("Request failed with {}: {}", status, self);
        (status, Json(body)).into_response()
    }
}

/// Type alias for Result with our Error type
pub type RelayResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Configuration(message.to_string())
}

/// Helper to create validation errors
pub fn validation_error(message: &str) -> Error {
    Error::Validation(message.to_string())
}

/// Helper to create upstream errors
pub fn upstream_error(service: &'static str, status: u16, body: String) -> Error {
    Error::Upstream {
        service,
        status,
        body,
    }
}

/// Helper to create Google authentication errors
pub fn google_auth_error(message: &str) -> Error {
    Error::GoogleAuth(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
