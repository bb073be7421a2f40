//! Utility functions module
//!
//! Time text parsing/formatting and shutdown signal handling.

pub mod signals;
pub mod time_format;

// Re-export main functions
pub use signals::shutdown_signal;
pub use time_format::{format_duration, parse_time_text, parse_weight_text};
