use async_trait::async_trait;
use clinic_relay::components::google_calendar::{
    fetch_appointments, CalendarEvent, EventTime, MAX_APPOINTMENTS,
};
use clinic_relay::components::CalendarSource;
use clinic_relay::error::{upstream_error, RelayResult};
use serde_json::json;

/// Calendar with a fixed agenda, for testing without Google
#[derive(Debug, Clone, Default)]
pub struct MockGoogleCalendar {
    events: Vec<CalendarEvent>,
    unavailable: bool,
}

impl MockGoogleCalendar {
    /// A calendar holding `count` half-hour appointments
    pub fn with_appointments(count: usize) -> Self {
        let events = (0..count)
            .map(|i| CalendarEvent {
                id: format!("event{}", i + 1),
                summary: Some(format!("Patient {}", i + 1)),
                start: EventTime {
                    date_time: Some(format!("2026-10-19T{:02}:00:00+03:00", 8 + i)),
                    date: None,
                },
                end: EventTime {
                    date_time: Some(format!("2026-10-19T{:02}:30:00+03:00", 8 + i)),
                    date: None,
                },
                ..Default::default()
            })
            .collect();

        Self {
            events,
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            events: Vec::new(),
            unavailable: true,
        }
    }
}

#[async_trait]
impl CalendarSource for MockGoogleCalendar {
    async fn upcoming_events(&self, max_results: u32) -> RelayResult<Vec<CalendarEvent>> {
        if self.unavailable {
            return Err(upstream_error("Google Calendar", 503, "Backend Error".to_string()));
        }
        Ok(self
            .events
            .iter()
            .take(max_results as usize)
            .cloned()
            .collect())
    }
}

#[tokio::test]
async fn test_appointments_are_capped() {
    let calendar = MockGoogleCalendar::with_appointments(14);

    let appointments = fetch_appointments(&calendar).await.unwrap();

    assert_eq!(appointments.len(), MAX_APPOINTMENTS as usize);
    assert_eq!(appointments[0].id, "event1");
    assert_eq!(appointments[9].id, "event10");
}

#[tokio::test]
async fn test_appointment_shape() {
    let calendar = MockGoogleCalendar::with_appointments(1);

    let appointments = fetch_appointments(&calendar).await.unwrap();

    assert_eq!(
        serde_json::to_value(&appointments).unwrap(),
        json!([{
            "id": "event1",
            "summary": "Patient 1",
            "description": "",
            "start": "2026-10-19T08:00:00+03:00",
            "end": "2026-10-19T08:30:00+03:00",
            "location": "",
            "status": "confirmed",
            "htmlLink": ""
        }])
    );
}

#[tokio::test]
async fn test_empty_calendar() {
    let calendar = MockGoogleCalendar::default();
    assert!(fetch_appointments(&calendar).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_calendar_outage_is_propagated() {
    let calendar = MockGoogleCalendar::unavailable();

    let err = fetch_appointments(&calendar).await.unwrap_err();

    assert_eq!(err.status_code().as_u16(), 503);
}
