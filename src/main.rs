//! Pomodoro Pad - A focus timer and multi-tab code scratchpad
//! 
//! This is the main entry point for the pomodoro-pad server.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use pomodoro_pad::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::countdown_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_pad={},tower_http=info", config.log_level()))
        .init();

    info!("Starting pomodoro-pad server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, timer={}min",
          config.host, config.port, config.minutes);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), config.minutes));

    // Start the countdown background task
    let timer_state = Arc::clone(&state);
    let countdown = tokio::spawn(async move {
        countdown_task(timer_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /timer, POST /timer/start|pause|reset, PUT /timer/minutes");
    info!("  GET  /documents, POST /documents, GET /documents/active");
    info!("  PUT  /documents/active/content, POST /documents/active/indent|copy");
    info!("  POST /documents/:id/activate|rename|rename/begin, DELETE /documents/:id");
    info!("  PUT  /rename, POST /rename/submit|blur|cancel");
    info!("  GET  /notifications, /status, /health");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    // No tick may outlive the server
    countdown.abort();

    info!("Server shutdown complete");
    Ok(())
}
