// Server module entry
// Listener setup, connection handling, signal handling, and process lifecycle

pub mod connection;
pub mod listener;
pub mod signal;

// Rust 不允许 loop 作为模块名（关键字），改用 server_loop
#[path = "loop.rs"]
pub mod server_loop;

use std::sync::Arc;

use crate::config::{AppState, Config};
use crate::error::Result;
use crate::logger;
use crate::release::Release;
use crate::snapshot;

// Re-export commonly used types
pub use listener::bind_listener;
pub use server_loop::start_server_loop;
pub use signal::{start_signal_handler, SignalHandler};

/// Run one release until a termination signal arrives
///
/// Starting → Listening → Terminating → Stopped. Returns `Ok(())` after a
/// signal-triggered shutdown.
pub async fn run(config: Config, release: &'static Release) -> Result<()> {
    let addr = config.get_socket_addr()?;

    let signals = Arc::new(SignalHandler::new());
    start_signal_handler(Arc::clone(&signals))?;

    let listener = bind_listener(addr)?;
    let bound = listener.local_addr()?;

    logger::log_config(&config);
    let state = Arc::new(AppState::new(config, release));
    logger::log_server_start(&bound, release, &snapshot::now_iso8601());

    start_server_loop(listener, state, Arc::clone(&signals.shutdown)).await;
    Ok(())
}

/// Binary entry point: load config, build the runtime, and run `release`
pub fn launch(release: &'static Release) -> Result<()> {
    let cfg = Config::load()?;
    logger::init(&cfg)?;

    // Worker threads default to the CPU count unless configured
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers.filter(|w| *w > 0) {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(run(cfg, release))
}
