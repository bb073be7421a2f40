//! Shared handle to the running appliance

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

use super::{ApplianceCommand, ApplianceSnapshot};

/// A command paired with the channel its resulting snapshot is sent back on
#[derive(Debug)]
pub struct ApplianceRequest {
    pub command: ApplianceCommand,
    pub reply: oneshot::Sender<ApplianceSnapshot>,
}

/// Application state shared by the HTTP handlers.
///
/// The appliance itself lives in its own task; this handle only forwards
/// commands to it and observes the snapshots it publishes.
#[derive(Debug)]
pub struct AppState {
    /// Command queue into the appliance task
    pub commands: mpsc::Sender<ApplianceRequest>,
    /// Latest snapshot published by the appliance task
    pub snapshot_rx: watch::Receiver<ApplianceSnapshot>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    pub fn new(
        port: u16,
        host: String,
        commands: mpsc::Sender<ApplianceRequest>,
        snapshot_rx: watch::Receiver<ApplianceSnapshot>,
    ) -> Self {
        Self {
            commands,
            snapshot_rx,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Send a command to the appliance task and wait for the resulting state
    pub async fn dispatch(&self, command: ApplianceCommand) -> Result<ApplianceSnapshot, String> {
        let action = command.name();
        debug!("Dispatching {} command", action);

        let (reply, response) = oneshot::channel();
        self.commands
            .send(ApplianceRequest { command, reply })
            .await
            .map_err(|e| format!("Appliance task is not running: {}", e))?;

        let snapshot = response
            .await
            .map_err(|e| format!("Appliance task dropped the {} command: {}", action, e))?;

        // Update last action tracking
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        info!("{} -> {} ({})", action, snapshot.shown_time, snapshot.status());
        Ok(snapshot)
    }

    /// Latest published snapshot, including tick updates
    pub fn get_snapshot(&self) -> ApplianceSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
