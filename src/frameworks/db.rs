use sqlx::{postgres::PgPoolOptions, PgPool};

// Build a small lazily-connecting PostgreSQL pool for the vault service.
// Connections are dialed on first use, not at startup.
pub fn connect_pool_lazy(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(database_url)
}
