mod handlers;

pub use handlers::{
    appointments_handler, followups_handler, get_call_handler, health_handler,
    initiate_call_handler, leads_handler, list_calls_handler, HealthResponse,
};

use crate::components::Components;
use crate::config::Config;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared state handed to every handler
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
    pub components: Components,
}

impl AppState {
    pub fn new(config: Arc<Config>, components: Components) -> Self {
        Self { config, components }
    }
}

/// Build the relay router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/initiate-call", post(initiate_call_handler))
        // Path the dashboard front end posts to
        .route("/api/vapi/initiate-call", post(initiate_call_handler))
        .route("/api/vapi/calls", get(list_calls_handler))
        .route("/api/vapi/calls/{id}", get(get_call_handler))
        .route("/api/leads", get(leads_handler))
        .route("/api/followups", get(followups_handler))
        .route("/api/appointments", get(appointments_handler))
        .layer(TraceLayer::new_for_http())
        // The dashboard is served from another origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
