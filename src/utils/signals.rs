//! Signal handling for graceful shutdown

use signal_hook_tokio::Signals;
use futures::stream::StreamExt;
use tracing::{info, warn};

/// Wait for SIGTERM or SIGINT
///
/// Falls back to tokio's Ctrl-C handler when the signal-hook registration fails.
pub async fn shutdown_signal() {
    let signals = Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ]);

    match signals {
        Ok(mut signals) => {
            let handle = signals.handle();
            if let Some(signal) = signals.next().await {
                info!("Received signal: {}", signal);
            }
            handle.close();
        }
        Err(e) => {
            warn!("Failed to register signal handlers ({}), waiting for Ctrl-C", e);
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for Ctrl-C: {}", e);
            }
        }
    }
}
