//! Greeter: an HTTP greeting service for CI/CD pipeline smoke tests.
//!
//! The service answers `GET /` with a fixed UTF-8 greeting and exposes a
//! liveness probe on `/health`. The router is built by a single factory,
//! [`routes::create_router`], and can be driven entirely in-process, so
//! tests never need to bind a socket. Listener startup, configuration
//! resolution, and all environment variable reads live in the binary
//! entry point.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
