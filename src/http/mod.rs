//! HTTP server startup and shutdown.
//!
//! The server binds a plain HTTP listener and serves the router until a
//! shutdown signal arrives, then drains in-flight connections. When
//! listening is disabled (test mode) no socket is ever bound; the caller
//! keeps the constructed router and drives it in-process.

mod server;
mod shutdown;

pub use server::{start_server, ServeOptions, ServerError};
