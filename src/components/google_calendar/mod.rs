mod client;
pub mod models;
pub mod time;

pub use client::GoogleCalendarClient;
pub use models::{AppointmentRecord, CalendarEvent, EventTime};

use crate::error::RelayResult;
use async_trait::async_trait;
use tracing::info;

/// How many upcoming appointments the dashboard shows
pub const MAX_APPOINTMENTS: u32 = 10;

/// Read access to upcoming calendar events
#[async_trait]
pub trait CalendarSource: Send + Sync + 'static {
    /// Up to `max_results` single-occurrence events starting from now, ordered by start time
    async fn upcoming_events(&self, max_results: u32) -> RelayResult<Vec<CalendarEvent>>;
}

/// Fetch upcoming events and reshape them for the dashboard
pub async fn fetch_appointments(source: &dyn CalendarSource) -> RelayResult<Vec<AppointmentRecord>> {
    let events = source.upcoming_events(MAX_APPOINTMENTS).await?;
    let appointments: Vec<AppointmentRecord> =
        events.into_iter().map(AppointmentRecord::from).collect();

    info!("Returning {} appointments", appointments.len());
    Ok(appointments)
}
