use std::sync::Arc;

use minesweeper_web::config::{AppState, Config};
use minesweeper_web::logger;
use minesweeper_web::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    // Port already in use (or any other bind failure) is fatal: diagnose and
    // exit non-zero.
    let listener = match server::create_listener(addr) {
        Ok(l) => l,
        Err(e) => {
            logger::log_bind_failed(&addr, &e);
            return Err(e.into());
        }
    };

    let state = Arc::new(AppState::new(&cfg));

    logger::log_server_start(&addr, &cfg);

    // Runs until externally terminated
    server::run(listener, state).await
}
