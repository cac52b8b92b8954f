pub mod credentials;
pub mod token;

pub use credentials::ServiceAccountKey;
pub use token::TokenManager;

use crate::error::RelayResult;
use async_trait::async_trait;

pub const SHEETS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
pub const CALENDAR_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/calendar.readonly";

/// Source of OAuth access tokens for Google APIs
#[async_trait]
pub trait AccessTokenProvider: Send + Sync + 'static {
    /// Get a bearer token valid for the given scope
    async fn access_token(&self, scope: &str) -> RelayResult<String>;
}
