//! Logger module
//!
//! Provides logging utilities for the HTTP server including:
//! - Server lifecycle logging
//! - Per-request access logging
//! - Error logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::{RequestLogEntry, RequestLogFormat};

use std::io;
use std::net::SocketAddr;

use crate::config::Config;
use crate::release::Release;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => writer::write_line(&mut io::stdout().lock(), message),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => writer::write_line(&mut io::stderr().lock(), message),
    }
}

pub fn log_server_start(addr: &SocketAddr, release: &Release, started_at: &str) {
    write_info(&format!(
        "\u{2705} Application v{} ({} Environment) is running on port {}",
        release.version,
        release.environment.display_name(),
        addr.port()
    ));
    write_info(&format!("\u{1f310} Server started at {started_at}"));
}

pub fn log_config(config: &Config) {
    match config.server.workers {
        Some(workers) => write_info(&format!("[CONFIG] Using {workers} worker threads")),
        None => write_info("[CONFIG] Using default worker threads (CPU cores)"),
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("[CONFIG] Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("[CONFIG] Error log: {path}"));
    }
}

/// Log one inbound request
pub fn log_request(entry: &RequestLogEntry, format: RequestLogFormat) {
    write_info(&entry.format(format));
}

pub fn log_signal(name: &str) {
    write_info(&format!("{name} signal received: closing HTTP server"));
}

pub fn log_server_stopped() {
    write_info("[SHUTDOWN] Listener closed, exiting");
}

pub fn log_connection_error(peer_addr: &SocketAddr, err: &impl std::fmt::Debug) {
    write_error(&format!(
        "[ERROR] Failed to serve connection from {peer_addr}: {err:?}"
    ));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}
