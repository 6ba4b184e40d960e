use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

// Health check endpoint - lightweight, no auth
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// Readiness probe: checks DB connectivity with timeout protection
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    let query = sqlx::query("SELECT 1").fetch_one(&state.db);
    match tokio::time::timeout(std::time::Duration::from_secs(5), query).await {
        Ok(Ok(_)) => (StatusCode::OK, "ready").into_response(),
        Ok(Err(e)) => (StatusCode::SERVICE_UNAVAILABLE, format!("not ready: {}", e)).into_response(),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "not ready: timeout").into_response(),
    }
}

// Metrics endpoint: returns JSON snapshot
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.metrics.get_snapshot();
    Json(snapshot)
}

// Prometheus-compatible text exposition format
pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let m = state.metrics.get_snapshot();
    let body = format!(
        "# HELP bookvault_books_created Total books created\n# TYPE bookvault_books_created counter\nbookvault_books_created {}\n\
# HELP bookvault_books_updated Total books updated\n# TYPE bookvault_books_updated counter\nbookvault_books_updated {}\n\
# HELP bookvault_books_deleted Total books soft-deleted\n# TYPE bookvault_books_deleted counter\nbookvault_books_deleted {}\n\
# HELP bookvault_reviews_created Total reviews created\n# TYPE bookvault_reviews_created counter\nbookvault_reviews_created {}\n\
# HELP bookvault_auth_failures Rejected bearer tokens\n# TYPE bookvault_auth_failures counter\nbookvault_auth_failures {}\n\
# HELP bookvault_uptime_seconds Uptime seconds\n# TYPE bookvault_uptime_seconds gauge\nbookvault_uptime_seconds {}\n",
        m.books_created,
        m.books_updated,
        m.books_deleted,
        m.reviews_created,
        m.auth_failures,
        m.uptime_seconds,
    );
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

// Version/Build info endpoint (JSON)
pub async fn version() -> impl IntoResponse {
    let body = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "package": {
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "license": env!("CARGO_PKG_LICENSE"),
        },
        "build": {
            "profile": if cfg!(debug_assertions) { "debug" } else { "release" },
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
        }
    });
    (StatusCode::OK, Json(body))
}
