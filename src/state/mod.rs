//! State management module
//!
//! The countdown timer, the appliance controller that drives it, and the
//! shared handle the HTTP layer talks to.

pub mod countdown;
pub mod appliance;
pub mod snapshot;
pub mod app_state;

// Re-export main types
pub use countdown::CountdownTimer;
pub use appliance::{Appliance, ApplianceCommand, Preset};
pub use snapshot::ApplianceSnapshot;
pub use app_state::{AppState, ApplianceRequest};
