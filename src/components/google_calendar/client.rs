use super::models::{CalendarEvent, EventList};
use super::time::time_min;
use super::CalendarSource;
use crate::components::google_auth::{AccessTokenProvider, CALENDAR_READONLY_SCOPE};
use crate::error::{other_error, RelayResult};
use crate::utils::http::read_json;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use std::sync::Arc;
use tracing::info;
use url::Url;

const SERVICE: &str = "Google Calendar";

/// Calendar v3 client bound to one calendar
#[derive(Clone)]
pub struct GoogleCalendarClient {
    base_url: String,
    calendar_id: String,
    tokens: Arc<dyn AccessTokenProvider>,
    client: Client,
}

impl GoogleCalendarClient {
    pub fn new(
        base_url: String,
        calendar_id: String,
        tokens: Arc<dyn AccessTokenProvider>,
        client: Client,
    ) -> Self {
        Self {
            base_url,
            calendar_id,
            tokens,
            client,
        }
    }

    /// `{base}/calendars/{calendar_id}/events` with the listing query
    fn events_url(&self, time_min: &str, max_results: u32) -> RelayResult<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| other_error("Calendar base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(["calendars", self.calendar_id.as_str(), "events"]);

        url.query_pairs_mut()
            .append_pair("timeMin", time_min)
            .append_pair("maxResults", &max_results.to_string())
            .append_pair("singleEvents", "true")
            .append_pair("orderBy", "startTime");

        Ok(url)
    }
}

#[async_trait]
impl CalendarSource for GoogleCalendarClient {
    async fn upcoming_events(&self, max_results: u32) -> RelayResult<Vec<CalendarEvent>> {
        let access_token = self.tokens.access_token(CALENDAR_READONLY_SCOPE).await?;

        let now = time_min(Utc::now());
        info!("Fetching events from {} on calendar {}...", now, self.calendar_id);

        let response = self
            .client
            .get(self.events_url(&now, max_results)?)
            .bearer_auth(access_token)
            .send()
            .await?;

        let events: EventList = read_json(SERVICE, response).await?;
        Ok(events.items)
    }
}
