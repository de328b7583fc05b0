//! Liveness probe endpoint.

/// Health check handler.
///
/// Answers `ok` whenever the process can serve HTTP at all. Load
/// balancers and pipeline jobs poll this instead of the greeting route so
/// probe traffic never hits cached content.
pub async fn health() -> &'static str {
    "ok"
}
