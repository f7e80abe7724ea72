use sqlx::PgPool;

// Application state shared with the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    // Optional pool: the service still serves probes without a datasource.
    pub db: Option<PgPool>,
}
