use crate::config::Config;
use crate::utils::http::create_client;
use std::fmt;
use std::sync::Arc;
use tracing::info;

// Export components
pub mod google_auth;
pub mod google_calendar;
pub mod google_sheets;
pub mod vapi;

pub use google_auth::{AccessTokenProvider, TokenManager};
pub use google_calendar::{CalendarSource, GoogleCalendarClient};
pub use google_sheets::{GoogleSheetsClient, SheetSource};
pub use vapi::{CallProvider, VapiClient};

/// The upstream providers every relay talks to
#[derive(Clone)]
pub struct Components {
    pub calls: Arc<dyn CallProvider>,
    pub sheets: Arc<dyn SheetSource>,
    pub calendar: Arc<dyn CalendarSource>,
}

impl fmt::Debug for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Components").finish_non_exhaustive()
    }
}

impl Components {
    /// Assemble the real clients. They share one HTTP connection pool and one
    /// service account token source.
    pub fn from_config(config: &Config) -> Self {
        let client = create_client();

        let tokens: Arc<dyn AccessTokenProvider> = Arc::new(TokenManager::new(
            config.google.credentials_path.clone(),
            client.clone(),
        ));

        info!("Registering component: vapi");
        let calls = Arc::new(VapiClient::new(config.vapi.clone(), client.clone()));

        info!("Registering component: google_sheets");
        let sheets = Arc::new(GoogleSheetsClient::new(
            config.google.sheets_base_url.clone(),
            config.google.sheet_id.clone(),
            Arc::clone(&tokens),
            client.clone(),
        ));

        info!("Registering component: google_calendar");
        let calendar = Arc::new(GoogleCalendarClient::new(
            config.google.calendar_base_url.clone(),
            config.google.calendar_id.clone(),
            tokens,
            client,
        ));

        Self {
            calls,
            sheets,
            calendar,
        }
    }
}
