//! Input validation errors and the alerts they surface as

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected user input. Never leaves the controller; it becomes an [`Alert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("entered time is not a valid MM:SS value")]
    InvalidTimeFormat,
    #[error("entered weight is not a whole number between 0 and 1200")]
    InvalidWeightFormat,
}

/// The single outstanding user-facing error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alert {
    InvalidTime,
    InvalidWeight,
}

impl Alert {
    /// Headline shown in the alert modal
    pub fn title(&self) -> &'static str {
        match self {
            Alert::InvalidTime => "Entered time is in the wrong format",
            Alert::InvalidWeight => "Entered weight is in the wrong format (whole numbers only)",
        }
    }

    pub fn message(&self) -> &'static str {
        "Please try again"
    }
}

impl From<InputError> for Alert {
    fn from(error: InputError) -> Self {
        match error {
            InputError::InvalidTimeFormat => Alert::InvalidTime,
            InputError::InvalidWeightFormat => Alert::InvalidWeight,
        }
    }
}
