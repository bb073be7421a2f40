//! Appliance control state machine
//!
//! Owns the user-facing state (raw input, power level, alert), validates and
//! interprets commands, and drives the [`CountdownTimer`]. The displayed time
//! is relayed from the timer's update channel.

use std::{ops::RangeInclusive, str::FromStr};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{ApplianceSnapshot, CountdownTimer};
use crate::{
    error::{Alert, InputError},
    utils::time_format::{format_duration, parse_time_text, parse_weight_text, ZERO_TIME},
};

/// Levels offered by the power selector
pub const POWER_LEVELS: RangeInclusive<i32> = 1..=10;

pub const DEFAULT_POWER_LEVEL: i32 = 5;

/// Power used for every defrost-by-weight run
pub const DEFROST_POWER_LEVEL: i32 = 3;

/// Built-in programs that bring their own duration and power level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Popcorn,
}

impl Preset {
    pub fn label(&self) -> &'static str {
        match self {
            Preset::Popcorn => "popcorn",
        }
    }

    /// Duration in `MM:SS` form
    pub fn duration_text(&self) -> &'static str {
        match self {
            Preset::Popcorn => "05:00",
        }
    }

    pub fn power_level(&self) -> i32 {
        match self {
            Preset::Popcorn => 7,
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_lowercase().as_str() {
            "popcorn" => Ok(Preset::Popcorn),
            other => Err(format!("Unknown preset: {}", other)),
        }
    }
}

/// Commands accepted from the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum ApplianceCommand {
    SetTimeText(String),
    SetWeightText(String),
    SetPowerLevel(i32),
    Start,
    Stop,
    Clear,
    DefrostByWeight,
    DefrostByTime,
    ApplyPreset(Preset),
    AcknowledgeAlert,
}

impl ApplianceCommand {
    /// Short name used for logging and last-action tracking
    pub fn name(&self) -> &'static str {
        match self {
            ApplianceCommand::SetTimeText(_) => "set-time",
            ApplianceCommand::SetWeightText(_) => "set-weight",
            ApplianceCommand::SetPowerLevel(_) => "set-power",
            ApplianceCommand::Start => "start",
            ApplianceCommand::Stop => "stop",
            ApplianceCommand::Clear => "clear",
            ApplianceCommand::DefrostByWeight => "defrost-weight",
            ApplianceCommand::DefrostByTime => "defrost-time",
            ApplianceCommand::ApplyPreset(_) => "preset",
            ApplianceCommand::AcknowledgeAlert => "acknowledge-alert",
        }
    }
}

/// Power level derived from a defrost-by-time duration: longer runs get a
/// lower level.
///
/// The result is not clamped to [`POWER_LEVELS`]; durations near the upper
/// parse limit yield 0.
pub fn defrost_power_level(duration_seconds: u64) -> i32 {
    let scaled = 10.0 - ((duration_seconds as f64 - 1.0) / 3659.0) * 9.0;
    scaled.floor() as i32 - 1
}

/// Controller state for a single appliance
#[derive(Debug)]
pub struct Appliance {
    entered_time_text: String,
    entered_weight_text: String,
    shown_time: String,
    power_level: i32,
    is_counting_down: bool,
    /// `MM:SS` value consulted instead of the time field on the next start
    pending_preset: Option<String>,
    alert: Option<Alert>,
    timer: CountdownTimer,
    time_updates: watch::Receiver<String>,
}

impl Appliance {
    pub fn new() -> Self {
        Self::with_timer(CountdownTimer::new())
    }

    /// Build a controller around an existing timer, subscribing to its updates
    pub fn with_timer(timer: CountdownTimer) -> Self {
        let time_updates = timer.subscribe();
        Self {
            entered_time_text: String::new(),
            entered_weight_text: String::new(),
            shown_time: ZERO_TIME.to_string(),
            power_level: DEFAULT_POWER_LEVEL,
            is_counting_down: false,
            pending_preset: None,
            alert: None,
            timer,
            time_updates,
        }
    }

    /// Dispatch a command to the matching operation
    pub fn apply(&mut self, command: ApplianceCommand) {
        match command {
            ApplianceCommand::SetTimeText(text) => self.set_entered_time_text(text),
            ApplianceCommand::SetWeightText(text) => self.set_entered_weight_text(text),
            ApplianceCommand::SetPowerLevel(level) => self.set_power_level(level),
            ApplianceCommand::Start => self.start_countdown(),
            ApplianceCommand::Stop => self.stop_countdown(),
            ApplianceCommand::Clear => self.clear_countdown(),
            ApplianceCommand::DefrostByWeight => self.defrost_by_weight(),
            ApplianceCommand::DefrostByTime => self.defrost_by_time(),
            ApplianceCommand::ApplyPreset(preset) => self.apply_preset(preset),
            ApplianceCommand::AcknowledgeAlert => self.acknowledge_alert(),
        }
    }

    pub fn set_entered_time_text(&mut self, text: String) {
        self.entered_time_text = text;
    }

    pub fn set_entered_weight_text(&mut self, text: String) {
        self.entered_weight_text = text;
    }

    /// Power selector binding. Range checks belong to the caller.
    pub fn set_power_level(&mut self, level: i32) {
        debug!("Power level set to {}", level);
        self.power_level = level;
    }

    /// Start counting down.
    ///
    /// The duration comes from, in order: a pending preset, a paused
    /// non-zero display, the entered time text. The pending preset is
    /// consumed by every call.
    pub fn start_countdown(&mut self) {
        let preset = self.pending_preset.take();

        if self.is_counting_down {
            debug!("Start ignored, countdown already running");
            return;
        }

        let source = match preset {
            Some(preset) => preset,
            None if self.shown_time != ZERO_TIME => self.shown_time.clone(),
            None => self.entered_time_text.clone(),
        };

        match parse_time_text(&source) {
            Ok(seconds) => {
                self.timer.start(seconds);
                self.is_counting_down = true;
                info!("Countdown started from {} at power {}", source, self.power_level);
            }
            Err(e) => self.raise(e),
        }
    }

    pub fn stop_countdown(&mut self) {
        self.timer.stop();
        if self.is_counting_down {
            info!("Countdown stopped at {}", self.shown_time);
        }
        self.is_counting_down = false;
    }

    pub fn clear_countdown(&mut self) {
        self.stop_countdown();
        self.shown_time = ZERO_TIME.to_string();
        self.timer.clear();
        self.is_counting_down = false;
        info!("Countdown cleared");
    }

    /// Defrost at a fixed power level for `power * grams` seconds
    pub fn defrost_by_weight(&mut self) {
        let weight = match parse_weight_text(&self.entered_weight_text) {
            Ok(weight) => weight,
            Err(e) => return self.raise(e),
        };

        self.power_level = DEFROST_POWER_LEVEL;
        let seconds = self.power_level as u64 * u64::from(weight);
        info!("Defrosting {}g for {}s", weight, seconds);

        self.pending_preset = Some(format_duration(seconds));
        self.start_countdown();
    }

    /// Defrost for the entered time, deriving the power level from it
    pub fn defrost_by_time(&mut self) {
        let seconds = match parse_time_text(&self.entered_time_text) {
            Ok(seconds) => seconds,
            Err(e) => return self.raise(e),
        };

        self.power_level = defrost_power_level(seconds);
        if !POWER_LEVELS.contains(&self.power_level) {
            warn!("Defrost power level {} is outside the selector range", self.power_level);
        }
        info!("Defrosting for {}s at power {}", seconds, self.power_level);

        self.start_countdown();
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        info!("Applying {} preset", preset.label());
        self.pending_preset = Some(preset.duration_text().to_string());
        self.power_level = preset.power_level();
        self.start_countdown();
    }

    /// Dismiss the outstanding alert
    pub fn acknowledge_alert(&mut self) {
        self.alert = None;
    }

    /// Handle one tick of the timer's periodic source
    pub fn on_tick(&mut self) {
        self.timer.tick();
        self.relay_time();

        if self.is_counting_down && !self.timer.is_active() {
            self.is_counting_down = false;
            info!("Countdown finished");
        }
    }

    /// Resolve when the timer is due for its next tick
    pub async fn next_tick(&mut self) {
        self.timer.next_tick().await;
    }

    pub fn snapshot(&self) -> ApplianceSnapshot {
        ApplianceSnapshot {
            shown_time: self.shown_time.clone(),
            alert: self.alert,
            power_level: self.power_level,
            is_counting_down: self.is_counting_down,
            entered_time_text: self.entered_time_text.clone(),
            entered_weight_text: self.entered_weight_text.clone(),
            timer_active: self.timer.is_active(),
            remaining_seconds: self.timer.remaining_seconds(),
        }
    }

    pub fn shown_time(&self) -> &str {
        &self.shown_time
    }

    pub fn alert(&self) -> Option<Alert> {
        self.alert
    }

    pub fn power_level(&self) -> i32 {
        self.power_level
    }

    pub fn is_counting_down(&self) -> bool {
        self.is_counting_down
    }

    pub fn pending_preset(&self) -> Option<&str> {
        self.pending_preset.as_deref()
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    fn relay_time(&mut self) {
        if self.time_updates.has_changed().unwrap_or(false) {
            self.shown_time = self.time_updates.borrow_and_update().clone();
        }
    }

    fn raise(&mut self, error: InputError) {
        warn!("Rejected input: {}", error);
        self.alert = Some(Alert::from(error));
    }
}

impl Default for Appliance {
    fn default() -> Self {
        Self::new()
    }
}
