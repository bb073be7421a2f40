//! Microwave Control - countdown timer engine and appliance state machine
//!
//! The core is the [`CountdownTimer`](state::CountdownTimer) and the
//! [`Appliance`](state::Appliance) controller that validates input, derives
//! defrost durations and power levels, and relays the remaining time for
//! display. An HTTP API exposes the controller's command surface.

pub mod config;
pub mod error;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{Alert, InputError};
pub use state::{AppState, Appliance, ApplianceCommand, ApplianceSnapshot, CountdownTimer, Preset};
pub use api::create_router;
pub use tasks::spawn_appliance;
pub use utils::signals::shutdown_signal;
