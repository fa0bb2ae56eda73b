use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

// ── GET /readyz ──────────────────────────────────────────────────────────────

/// Service-specific readiness: gates on the database connection. A failed
/// ping marks the instance unready; the pool reconnects on its own.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "readiness probe failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
