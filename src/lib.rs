//! Blue-green demo servers
//!
//! Shared plumbing for the `server-blue` and `server-green` binaries. Each
//! binary runs one [`release::Release`]; the listener, logging, config, and
//! handlers are identical between them.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod release;
pub mod server;
pub mod snapshot;

pub use config::{AppState, Config};
pub use error::ServerError;
pub use release::{Release, BLUE, GREEN};
pub use server::{launch, run};
