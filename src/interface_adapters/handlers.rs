use crate::interface_adapters::protocol::{ErrorResponse, HealthResponse};
use crate::interface_adapters::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use tracing::warn;

// Handler for the liveness probe.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        datasource_configured: state.db.is_some(),
    })
}

// Handler for the readiness probe; checks the datasource when one is wired.
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<ErrorResponse>)> {
    if let Some(db) = &state.db {
        if let Err(err) = sqlx::query("SELECT 1").execute(db).await {
            warn!(error = %err, "datasource readiness probe failed");
            return Err(error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "datasource unavailable",
            ));
        }
    }

    Ok(Json(HealthResponse {
        status: "ready".to_string(),
        datasource_configured: state.db.is_some(),
    }))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}
