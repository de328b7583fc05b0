//! Request ID middleware for correlating logs with requests.
//!
//! Each incoming request gets a UUID v4 and a tracing span covering its
//! whole lifecycle, so every log line emitted while handling it carries
//! the same request_id field.

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Extension type for accessing the request ID in handlers if needed.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Middleware that generates a request ID and creates a request span.
///
/// Installed as the outermost layer so the span wraps all request
/// processing.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    request.extensions_mut().insert(RequestId(request_id));

    async move {
        let response = next.run(request).await;
        tracing::debug!(status = response.status().as_u16(), "Request completed");
        response
    }
    .instrument(span)
    .await
}
