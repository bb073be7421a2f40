//! Observable appliance state published to the outer surface

use serde::{Deserialize, Serialize};

use crate::error::Alert;

/// Point-in-time copy of everything the presentation layer renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceSnapshot {
    /// `MM:SS` display value
    pub shown_time: String,
    /// Outstanding validation error, if any
    pub alert: Option<Alert>,
    pub power_level: i32,
    pub is_counting_down: bool,
    /// Raw text of the time and weight fields
    pub entered_time_text: String,
    pub entered_weight_text: String,
    pub timer_active: bool,
    pub remaining_seconds: u64,
}

impl ApplianceSnapshot {
    /// Status label used in command responses
    pub fn status(&self) -> &'static str {
        if self.alert.is_some() {
            "alert"
        } else if self.is_counting_down {
            "active"
        } else {
            "inactive"
        }
    }
}
