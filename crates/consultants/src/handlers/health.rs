//! Liveness probe for the local server.

use axum::http::StatusCode;

/// GET /health - returns 200 as soon as the server accepts connections.
#[axum::debug_handler]
pub async fn health() -> StatusCode {
    StatusCode::OK
}
