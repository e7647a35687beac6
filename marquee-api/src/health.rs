use axum::http::StatusCode;

/// Returns "OK" while the process is serving requests
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
