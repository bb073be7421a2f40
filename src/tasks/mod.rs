//! Background tasks module
//!
//! This module contains the task that owns the appliance and runs alongside
//! the HTTP server.

pub mod appliance_task;

// Re-export main functions
pub use appliance_task::{appliance_task, spawn_appliance};
