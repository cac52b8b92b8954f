use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::AppState;
use crate::components::google_calendar::{fetch_appointments, AppointmentRecord};
use crate::components::google_sheets::{fetch_leads, LeadRecord};
use crate::components::vapi::CallRequest;
use crate::error::{config_error, validation_error, RelayResult};

/// Page size when the dashboard does not ask for one
pub const DEFAULT_CALL_LIMIT: u32 = 50;

/// Body of the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Query of the call listing endpoint
#[derive(Debug, Default, Deserialize)]
pub struct CallsQuery {
    pub limit: Option<String>,
}

impl CallsQuery {
    fn limit(&self) -> RelayResult<u32> {
        match self.limit.as_deref() {
            None | Some("") => Ok(DEFAULT_CALL_LIMIT),
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| validation_error("limit must be a non-negative integer")),
        }
    }
}

/// Handler for API health check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "API server is running".to_string(),
    })
}

/// Start an outbound call through Vapi
pub async fn initiate_call_handler(
    State(state): State<AppState>,
    payload: Result<Json<CallRequest>, JsonRejection>,
) -> RelayResult<Json<Value>> {
    let Json(request) = payload
        .map_err(|e| validation_error(&format!("Invalid request body: {}", e.body_text())))?;
    let target = request.into_target()?;

    let call = state.components.calls.initiate_call(&target).await?;
    Ok(Json(call))
}

/// List recent Vapi calls
pub async fn list_calls_handler(
    State(state): State<AppState>,
    Query(query): Query<CallsQuery>,
) -> RelayResult<Json<Value>> {
    let limit = query.limit()?;
    let calls = state.components.calls.list_calls(limit).await?;
    Ok(Json(calls))
}

/// Fetch one Vapi call
pub async fn get_call_handler(
    State(state): State<AppState>,
    Path(call_id): Path<String>,
) -> RelayResult<Json<Value>> {
    let call = state.components.calls.get_call(&call_id).await?;
    Ok(Json(call))
}

/// Leads from the form responses sheet
pub async fn leads_handler(State(state): State<AppState>) -> RelayResult<Json<Vec<LeadRecord>>> {
    info!("Fetching leads from Google Sheet...");
    let leads = fetch_leads(
        state.components.sheets.as_ref(),
        &state.config.google.leads_range,
    )
    .await?;

    info!("Returning {} leads", leads.len());
    Ok(Json(leads))
}

/// Follow-ups from their own sheet range, if one is configured
pub async fn followups_handler(
    State(state): State<AppState>,
) -> RelayResult<Json<Vec<LeadRecord>>> {
    let range = state
        .config
        .google
        .followups_range
        .as_deref()
        .ok_or_else(|| config_error("Server misconfiguration: Missing FOLLOWUPS_RANGE"))?;

    info!("Fetching follow-ups from Google Sheet...");
    let followups = fetch_leads(state.components.sheets.as_ref(), range).await?;

    info!("Returning {} follow-ups", followups.len());
    Ok(Json(followups))
}

/// Upcoming appointments from Google Calendar
pub async fn appointments_handler(
    State(state): State<AppState>,
) -> RelayResult<Json<Vec<AppointmentRecord>>> {
    info!("Fetching appointments from Google Calendar...");
    let appointments = fetch_appointments(state.components.calendar.as_ref()).await?;
    Ok(Json(appointments))
}
