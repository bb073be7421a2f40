//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, warn};

use crate::state::{
    appliance::POWER_LEVELS,
    AppState, ApplianceCommand, Preset,
};
use super::responses::{ApiResponse, HealthResponse, PowerInput, StatusResponse, TextInput};

type CommandResult = Result<Json<ApiResponse>, StatusCode>;

/// Forward a command and wrap the resulting snapshot
async fn run(state: &AppState, command: ApplianceCommand, message: &str) -> CommandResult {
    let action = command.name();
    match state.dispatch(command).await {
        Ok(snapshot) => Ok(Json(ApiResponse::from_snapshot(message.to_string(), snapshot))),
        Err(e) => {
            error!("Failed to run {} command: {}", action, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle PUT /input/time - Replace the entered time text
pub async fn time_input_handler(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TextInput>,
) -> CommandResult {
    run(&state, ApplianceCommand::SetTimeText(input.text), "Time entered").await
}

/// Handle PUT /input/weight - Replace the entered weight text
pub async fn weight_input_handler(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TextInput>,
) -> CommandResult {
    run(&state, ApplianceCommand::SetWeightText(input.text), "Weight entered").await
}

/// Handle PUT /power - Select a power level between 1 and 10
pub async fn power_handler(
    State(state): State<Arc<AppState>>,
    Json(input): Json<PowerInput>,
) -> CommandResult {
    if !POWER_LEVELS.contains(&input.level) {
        warn!("Rejected power level {}", input.level);
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    run(&state, ApplianceCommand::SetPowerLevel(input.level), "Power level set").await
}

/// Handle POST /start - Start or resume the countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> CommandResult {
    run(&state, ApplianceCommand::Start, "Countdown started").await
}

/// Handle POST /stop - Pause the countdown
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> CommandResult {
    run(&state, ApplianceCommand::Stop, "Countdown stopped").await
}

/// Handle POST /clear - Stop and reset the display
pub async fn clear_handler(State(state): State<Arc<AppState>>) -> CommandResult {
    run(&state, ApplianceCommand::Clear, "Countdown cleared").await
}

/// Handle POST /defrost/weight - Defrost using the entered weight
pub async fn defrost_weight_handler(State(state): State<Arc<AppState>>) -> CommandResult {
    run(&state, ApplianceCommand::DefrostByWeight, "Defrosting by weight").await
}

/// Handle POST /defrost/time - Defrost using the entered time
pub async fn defrost_time_handler(State(state): State<Arc<AppState>>) -> CommandResult {
    run(&state, ApplianceCommand::DefrostByTime, "Defrosting by time").await
}

/// Handle POST /preset/:name - Run a built-in preset
pub async fn preset_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> CommandResult {
    let preset: Preset = match name.parse() {
        Ok(preset) => preset,
        Err(e) => {
            warn!("{}", e);
            return Err(StatusCode::NOT_FOUND);
        }
    };

    let message = format!("Running {} preset", preset.label());
    run(&state, ApplianceCommand::ApplyPreset(preset), &message).await
}

/// Handle POST /alert/acknowledge - Dismiss the outstanding alert
pub async fn acknowledge_alert_handler(State(state): State<Arc<AppState>>) -> CommandResult {
    run(&state, ApplianceCommand::AcknowledgeAlert, "Alert acknowledged").await
}

/// Handle GET /status - Return the latest appliance state
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        appliance: state.get_snapshot(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
