//! Subject registry service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ trace / request-id ──▶ access log ──▶ timeout / body limit
//!                                                                  │
//!                              ┌───────────────────────────────────┘
//!                              ▼
//!                     /api/materias routes ──▶ Registry (RwLock)
//!                              │
//!                              ▼ (no match)
//!                     static files (public/) ──▶ 404 {ok:false}
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use materias_api::config::loader::load_or_default;
use materias_api::lifecycle::{spawn_signal_listener, Shutdown};
use materias_api::observability::init_logging;
use materias_api::HttpServer;

#[derive(Parser)]
#[command(name = "materias-api")]
#[command(about = "In-memory subject registry over HTTP", long_about = None)]
struct Args {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_or_default(args.config.as_deref())?;

    init_logging(&config.observability)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        static_dir = %config.static_files.directory,
        strict_validation = config.security.strict_validation,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    spawn_signal_listener(&shutdown);

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
