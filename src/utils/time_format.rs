//! Parsing and formatting of the `MM:SS` display and weight input

use crate::error::InputError;

/// What the display shows when nothing is loaded
pub const ZERO_TIME: &str = "00:00";

/// Heaviest accepted defrost weight in grams
pub const MAX_WEIGHT_GRAMS: u32 = 1200;

const MAX_MINUTES: u64 = 60;
const MAX_SECONDS: u64 = 60;

/// Format whole seconds as zero-padded `MM:SS`.
///
/// Minutes are not clamped: 4523 seconds renders as `"75:23"`.
pub fn format_duration(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Parse `MM:SS` text into whole seconds.
///
/// The text must be exactly five characters with a single `:`, both sides
/// made of digits, minutes and seconds each within `0..=60`.
pub fn parse_time_text(text: &str) -> Result<u64, InputError> {
    if text.chars().count() != 5 {
        return Err(InputError::InvalidTimeFormat);
    }

    let (minutes, seconds) = text
        .split_once(':')
        .ok_or(InputError::InvalidTimeFormat)?;
    if seconds.contains(':') {
        return Err(InputError::InvalidTimeFormat);
    }

    let minutes = parse_digits(minutes).ok_or(InputError::InvalidTimeFormat)?;
    let seconds = parse_digits(seconds).ok_or(InputError::InvalidTimeFormat)?;
    if minutes > MAX_MINUTES || seconds > MAX_SECONDS {
        return Err(InputError::InvalidTimeFormat);
    }

    Ok(minutes * 60 + seconds)
}

/// Parse a whole-gram weight in `0..=1200`
pub fn parse_weight_text(text: &str) -> Result<u32, InputError> {
    let weight = parse_digits(text)
        .and_then(|value| u32::try_from(value).ok())
        .ok_or(InputError::InvalidWeightFormat)?;

    if weight > MAX_WEIGHT_GRAMS {
        return Err(InputError::InvalidWeightFormat);
    }
    Ok(weight)
}

// Digits only: no sign, whitespace or decimal point.
fn parse_digits(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
