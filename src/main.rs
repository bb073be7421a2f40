//! Microwave Control - countdown timer engine and appliance state machine
//!
//! This is the main entry point for the microwave-control server.

use std::sync::Arc;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use microwave_control::{
    api::create_router,
    config::Config,
    state::{AppState, Appliance},
    tasks::spawn_appliance,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("microwave_control={},tower_http=info", config.log_level()))
        .init();

    info!("Starting microwave-control server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, queue_depth={}",
          config.host, config.port, config.queue_depth);

    // The appliance runs in its own task; handlers talk to it through AppState
    let (commands, snapshots) = spawn_appliance(Appliance::new(), usize::from(config.queue_depth));
    let state = Arc::new(AppState::new(config.port, config.host.clone(), commands, snapshots));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  PUT  /input/time        - Set entered time (MM:SS)");
    info!("  PUT  /input/weight      - Set entered weight (grams)");
    info!("  PUT  /power             - Select power level 1-10");
    info!("  POST /start             - Start or resume the countdown");
    info!("  POST /stop              - Pause the countdown");
    info!("  POST /clear             - Stop and reset the display");
    info!("  POST /defrost/weight    - Defrost by entered weight");
    info!("  POST /defrost/time      - Defrost by entered time");
    info!("  POST /preset/:name      - Run a preset (popcorn)");
    info!("  POST /alert/acknowledge - Dismiss the current alert");
    info!("  GET  /status            - Current display and settings");
    info!("  GET  /health            - Health check");

    // Setup graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}
