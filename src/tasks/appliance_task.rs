//! Appliance control task
//!
//! The single execution context: commands and timer ticks are handled one at
//! a time by this task, so their effects never interleave.

use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::state::{Appliance, ApplianceRequest, ApplianceSnapshot};

/// Spawn the appliance task, returning its command queue and snapshot feed
pub fn spawn_appliance(
    appliance: Appliance,
    queue_depth: usize,
) -> (mpsc::Sender<ApplianceRequest>, watch::Receiver<ApplianceSnapshot>) {
    let (command_tx, command_rx) = mpsc::channel(queue_depth);
    let (snapshot_tx, snapshot_rx) = watch::channel(appliance.snapshot());

    tokio::spawn(appliance_task(appliance, command_rx, snapshot_tx));
    (command_tx, snapshot_rx)
}

/// Run the appliance until the command channel closes.
///
/// Publishes a fresh snapshot after every command and every tick.
pub async fn appliance_task(
    mut appliance: Appliance,
    mut requests: mpsc::Receiver<ApplianceRequest>,
    snapshots: watch::Sender<ApplianceSnapshot>,
) {
    info!("Starting appliance control task");

    loop {
        tokio::select! {
            request = requests.recv() => {
                let Some(ApplianceRequest { command, reply }) = request else {
                    info!("Command channel closed, stopping appliance task");
                    break;
                };

                debug!("Handling {} command", command.name());
                appliance.apply(command);

                let snapshot = appliance.snapshot();
                snapshots.send_replace(snapshot.clone());
                if reply.send(snapshot).is_err() {
                    debug!("Requester went away before the reply was sent");
                }
            }

            // Pends forever while the timer is idle
            _ = appliance.next_tick() => {
                appliance.on_tick();
                let snapshot = appliance.snapshot();
                debug!("Tick: {} remaining", snapshot.shown_time);
                snapshots.send_replace(snapshot);
            }
        }
    }

    appliance.stop_countdown();
    snapshots.send_replace(appliance.snapshot());
}
