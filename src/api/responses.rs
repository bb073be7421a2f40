//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::ApplianceSnapshot;

/// API response structure for command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub appliance: ApplianceSnapshot,
}

impl ApiResponse {
    /// Build a response whose status follows the snapshot.
    ///
    /// An outstanding alert replaces `message` with the alert's text.
    pub fn from_snapshot(message: String, appliance: ApplianceSnapshot) -> Self {
        let message = match appliance.alert {
            Some(alert) => format!("{}. {}", alert.title(), alert.message()),
            None => message,
        };

        Self {
            status: appliance.status().to_string(),
            message,
            timestamp: Utc::now(),
            appliance,
        }
    }
}

/// Body of the time and weight input endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextInput {
    pub text: String,
}

/// Body of the power level endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerInput {
    pub level: i32,
}

/// Status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub appliance: ApplianceSnapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
