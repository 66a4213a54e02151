//! inkmatch-web - gallery service binary
//!
//! Serves the JSON API over a SQLite-backed document store (or an
//! in-memory store with --ephemeral).

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use inkmatch_core::store::{DocumentStore, MemoryStore, SqliteStore};
use inkmatch_web::{build_router, config, AppState};

#[derive(Parser, Debug)]
#[command(name = "inkmatch-web", about = "Inkmatch gallery service")]
struct Args {
    /// Port to listen on
    #[arg(long, default_value_t = 5780)]
    port: u16,

    /// Data directory (overrides INKMATCH_DATA_DIR and the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Use an in-memory store; nothing is persisted
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting Inkmatch gallery service (inkmatch-web) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();

    let store: Arc<dyn DocumentStore> = if args.ephemeral {
        info!("Using in-memory store; nothing will be persisted");
        Arc::new(MemoryStore::new())
    } else {
        let data_dir = config::resolve_data_dir(args.data_dir.as_deref());
        std::fs::create_dir_all(&data_dir)?;
        let db_path = data_dir.join("inkmatch.db");
        info!("Database path: {}", db_path.display());
        Arc::new(SqliteStore::open(&db_path).await?)
    };

    let state = AppState::new(store);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("inkmatch-web listening on http://127.0.0.1:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
