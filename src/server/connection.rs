// Connection handling module
// Serves a single accepted TCP connection on its own task

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Handle a single connection in a spawned task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Configures HTTP/1.1 keep-alive from config
/// 3. Bounds how long a request head may take to arrive
/// 4. Serves the connection with the request handler
///
/// Only the wait for a request head is timed. A slow client that stalls
/// mid-head, or a keep-alive connection left idle, is closed quietly; a
/// client busy with requests is never cut off.
pub fn handle_connection(stream: TcpStream, peer_addr: SocketAddr, state: &Arc<AppState>) {
    let state = Arc::clone(state);

    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder
            .timer(TokioTimer::new())
            .keep_alive(state.config.performance.keep_alive)
            .header_read_timeout(Duration::from_secs(
                state.config.performance.header_read_timeout,
            ));

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&state))),
        );

        match conn.await {
            Ok(()) => {}
            // Client hung up or never finished its request head
            Err(err) if err.is_incomplete_message() || err.is_timeout() => {}
            Err(err) => logger::log_connection_error(&peer_addr, &err),
        }
    });
}
