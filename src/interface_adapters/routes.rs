use crate::interface_adapters::handlers::{health, ready};
use crate::interface_adapters::state::AppState;
use axum::{routing::get, Router};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(ready))
        .with_state(state)
}
