use serde::Serialize;

// Response payload for health probes.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub datasource_configured: bool,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
