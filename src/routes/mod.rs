//! HTTP route handlers.
//!
//! Two routes exist: the greeting payload on `/` and a liveness probe on
//! `/health`. The greeting is constant content and carries a short
//! Cache-Control header; the probe is always served fresh. Anything else
//! falls through to the framework default (404 for unknown paths, 405 for
//! a wrong method on a known path).
//!
//! Every request passes through the request ID middleware, so all logs
//! emitted while handling it can be correlated.

pub mod greeting;
pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_GREETING;
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and cache headers.
///
/// The router is a plain value: constructing it performs no I/O and binds
/// no socket, so a test harness can drive it in-process. Every call
/// returns a fresh, independent router.
pub fn create_router() -> Router {
    // Greeting - constant content, cacheable
    let greeting_routes = Router::new()
        .route("/", get(greeting::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_GREETING),
        ));

    // Health check - uncached so probes always see a live response
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(greeting_routes)
        .merge(health_routes)
        // Outermost layer: the request span must wrap everything
        .layer(middleware::from_fn(request_id_layer))
}
