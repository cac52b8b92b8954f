use serde::{Deserialize, Serialize};

/// Summary shown for events without a title
pub const DEFAULT_SUMMARY: &str = "Busy";
pub const DEFAULT_STATUS: &str = "confirmed";

/// Response of `events.list`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventList {
    #[serde(default)]
    pub items: Vec<CalendarEvent>,
}

/// Start or end of an event: `dateTime` for timed events, `date` for all-day ones
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    pub date_time: Option<String>,
    pub date: Option<String>,
}

impl EventTime {
    /// The timestamp if there is one, otherwise the all-day date
    pub fn as_text(&self) -> String {
        self.date_time
            .clone()
            .or_else(|| self.date.clone())
            .unwrap_or_default()
    }
}

/// Calendar event as the Calendar API returns it, limited to the fields we use
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub html_link: Option<String>,
    #[serde(default)]
    pub start: EventTime,
    #[serde(default)]
    pub end: EventTime,
}

/// Appointment as the dashboard consumes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    pub id: String,
    pub summary: String,
    pub description: String,
    pub start: String,
    pub end: String,
    pub location: String,
    pub status: String,
    pub html_link: String,
}

impl From<CalendarEvent> for AppointmentRecord {
    fn from(event: CalendarEvent) -> Self {
        Self {
            start: event.start.as_text(),
            end: event.end.as_text(),
            id: event.id,
            summary: event.summary.unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
            description: event.description.unwrap_or_default(),
            location: event.location.unwrap_or_default(),
            status: event.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            html_link: event.html_link.unwrap_or_default(),
        }
    }
}
