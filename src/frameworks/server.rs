use crate::frameworks::{config, db};
use crate::interface_adapters::env::{DotenvFileSource, ProcessPropertySink};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use crate::use_cases::env_boot::EnvBootUseCase;
use std::net::SocketAddr;
use std::path::PathBuf;

// Candidate directories for the env definition file, in priority order.
// The subdirectory candidate covers processes started from the repository root.
const PRIMARY_ENV_DIR: &str = "./secure_vault_ai";
const FALLBACK_ENV_DIR: &str = "./";

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() {
    // Copy env definition entries into the process environment before
    // anything reads configuration; the file may carry RUST_LOG/LOG_FORMAT.
    let boot = EnvBootUseCase {
        source: DotenvFileSource,
        sink: ProcessPropertySink,
        primary_dir: PathBuf::from(PRIMARY_ENV_DIR),
        fallback_dir: PathBuf::from(FALLBACK_ENV_DIR),
    }
    .execute();

    init_tracing();

    let boot = match boot {
        Ok(report) => report,
        Err(err) => {
            tracing::error!(error = ?err, "environment bootstrap failed");
            return; // Abort startup before the framework runs.
        }
    };

    tracing::info!("Checking for variables in .env file...");
    for entry in &boot.applied {
        tracing::info!("Property Set: {}={}", entry.key, entry.value);
    }
    if let Some(dir) = &boot.source_dir {
        tracing::debug!(dir = %dir.display(), "env definition file selected");
    }

    // Wire the optional datasource pool from the propagated environment.
    let db = match config::datasource_url() {
        Some(url) => match db::connect_pool_lazy(&url) {
            Ok(pool) => Some(pool),
            Err(err) => {
                tracing::warn!(error = %err, "datasource url rejected; continuing without pool");
                None
            }
        },
        None => {
            tracing::warn!("no datasource url configured; continuing without pool");
            None
        }
    };

    let state = AppState { db };

    // Start the web server with the HTTP routes wired up.
    let app = routes::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config::http_port()));
    tracing::info!(%addr, "listening");

    // Bind TCP listener with error handling.
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%addr, error = %err, "failed to bind");
            return; // Abort startup on bind failure.
        }
    };

    // Serve app and report errors rather than panicking.
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(error = %err, "server error");
    }
}
