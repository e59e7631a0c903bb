use anyhow::{Context, Result};
use clap::Parser;
use scribe_minutes::{create_router, AppState, Config};
use tracing::info;

/// Turn a scribe's raw meeting notes into formatted HTML minutes.
#[derive(Debug, Parser)]
#[command(name = "scribe-minutes", version)]
struct Cli {
    /// Path to the configuration file (without extension)
    #[arg(long, default_value = "config/scribe-minutes")]
    config: String,

    /// Override the configured bind address
    #[arg(long)]
    bind: Option<String>,

    /// Override the configured port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    let bind = cli.bind.unwrap_or(cfg.service.http.bind);
    let port = cli.port.unwrap_or(cfg.service.http.port);

    info!("{} starting", cfg.service.name);
    info!("HTTP server will bind to {}:{}", bind, port);

    let state = AppState::new(cfg.diagnostics.show_error_detail);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((bind.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", bind, port))?;

    axum::serve(listener, app)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
