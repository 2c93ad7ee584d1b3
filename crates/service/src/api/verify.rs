use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Liveness probe.
pub async fn verify() -> impl IntoResponse {
    (StatusCode::OK, "CP2K input transformer service running")
}
