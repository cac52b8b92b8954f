#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use clinic_relay::components::google_calendar::CalendarEvent;
use clinic_relay::components::google_sheets::ValueRange;
use clinic_relay::components::vapi::CallTarget;
use clinic_relay::components::{CalendarSource, CallProvider, Components, SheetSource};
use clinic_relay::config::{Config, GoogleConfig, VapiConfig};
use clinic_relay::error::{upstream_error, RelayResult};
use clinic_relay::server::{router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Configuration that never touches the environment
pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        vapi: VapiConfig {
            api_key: Some("test_api_key".to_string()),
            assistant_id: Some("test_assistant".to_string()),
            phone_number_id: Some("test_phone_number".to_string()),
            base_url: "http://127.0.0.1:9".to_string(),
        },
        google: GoogleConfig {
            credentials_path: PathBuf::from("/nonexistent/service_account.json"),
            calendar_id: "primary".to_string(),
            sheet_id: "test_sheet".to_string(),
            leads_range: "Form Responses 1!A:J".to_string(),
            followups_range: Some("Follow Ups!A:F".to_string()),
            sheets_base_url: "http://127.0.0.1:9".to_string(),
            calendar_base_url: "http://127.0.0.1:9".to_string(),
        },
    }
}

/// Call provider that records what it was asked and answers from a script
#[derive(Default)]
pub struct MockCalls {
    pub dialed: Mutex<Vec<CallTarget>>,
    pub limits: Mutex<Vec<u32>>,
    pub fail_with: Option<(u16, String)>,
}

#[async_trait]
impl CallProvider for MockCalls {
    async fn initiate_call(&self, target: &CallTarget) -> RelayResult<Value> {
        if let Some((status, body)) = &self.fail_with {
            return Err(upstream_error("Vapi", *status, body.clone()));
        }
        self.dialed.lock().unwrap().push(target.clone());
        Ok(json!({ "id": "call_1", "status": "queued", "customer": target.customer }))
    }

    async fn list_calls(&self, limit: u32) -> RelayResult<Value> {
        if let Some((status, body)) = &self.fail_with {
            return Err(upstream_error("Vapi", *status, body.clone()));
        }
        self.limits.lock().unwrap().push(limit);
        Ok(json!([{ "id": "call_1" }, { "id": "call_2" }]))
    }

    async fn get_call(&self, call_id: &str) -> RelayResult<Value> {
        if let Some((status, body)) = &self.fail_with {
            return Err(upstream_error("Vapi", *status, body.clone()));
        }
        Ok(json!({ "id": call_id, "status": "ended" }))
    }
}

/// Sheet source serving fixed ranges
#[derive(Default)]
pub struct MockSheets {
    pub ranges: HashMap<String, Value>,
}

impl MockSheets {
    pub fn with_range(mut self, range: &str, values: Value) -> Self {
        self.ranges.insert(range.to_string(), values);
        self
    }
}

#[async_trait]
impl SheetSource for MockSheets {
    async fn read_range(&self, range: &str) -> RelayResult<ValueRange> {
        let values = match self.ranges.get(range) {
            Some(values) => serde_json::from_value(values.clone())?,
            None => Vec::new(),
        };
        Ok(ValueRange {
            range: Some(range.to_string()),
            values,
        })
    }
}

/// Calendar source serving fixed events
#[derive(Default)]
pub struct MockCalendar {
    pub events: Vec<CalendarEvent>,
    pub requested: Mutex<Vec<u32>>,
}

#[async_trait]
impl CalendarSource for MockCalendar {
    async fn upcoming_events(&self, max_results: u32) -> RelayResult<Vec<CalendarEvent>> {
        self.requested.lock().unwrap().push(max_results);
        Ok(self.events.iter().take(max_results as usize).cloned().collect())
    }
}

pub fn components(calls: MockCalls, sheets: MockSheets, calendar: MockCalendar) -> Components {
    Components {
        calls: Arc::new(calls),
        sheets: Arc::new(sheets),
        calendar: Arc::new(calendar),
    }
}

pub fn app(config: Config, components: Components) -> Router {
    router(AppState::new(Arc::new(config), components))
}

/// Send one request through the router and decode the JSON reply
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
