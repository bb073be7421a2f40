//! HTTP API module
//!
//! The command surface of the appliance: input setters, countdown controls,
//! defrost and preset programs, alert acknowledgment and status.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/input/time", put(time_input_handler))
        .route("/input/weight", put(weight_input_handler))
        .route("/power", put(power_handler))
        .route("/start", post(start_handler))
        .route("/stop", post(stop_handler))
        .route("/clear", post(clear_handler))
        .route("/defrost/weight", post(defrost_weight_handler))
        .route("/defrost/time", post(defrost_time_handler))
        .route("/preset/:name", post(preset_handler))
        .route("/alert/acknowledge", post(acknowledge_alert_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
