// Server module entry point
// Provides listener creation, the accept loop, and per-connection serving.

pub mod connection;
pub mod listener;

pub use listener::create_listener;

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::AppState;
use crate::logger;

/// Accept loop
///
/// Runs until the process is externally terminated. Each accepted connection
/// is served on its own task, so one request's file read never blocks
/// unrelated requests. Accept errors are logged and the loop continues.
pub async fn run(
    listener: TcpListener,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                if state.config.logging.access_log {
                    logger::log_connection_accepted(&peer_addr);
                }
                connection::handle_connection(stream, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
