// tarjama - English/Arabic machine translation inference service

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tarjama::cli::Args;
use tarjama::config::AppConfig;
use tarjama::engine::{MarianEngine, Translator};
use tarjama::server::create_router;
use tarjama::utils::logging;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration, CLI flags take precedence
    let mut config = AppConfig::load()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.preload {
        config.model.preload = true;
    }

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting tarjama v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Construct the translation engine
    let engine = Arc::new(MarianEngine::new(&config.model)?);

    // Phase 4: Optionally load both directions before accepting traffic
    if config.model.preload {
        info!("Preloading translation models");
        engine.preload().await?;
        info!(loaded = ?engine.loaded_directions(), "models ready");
    }

    // Phase 5: Build and start HTTP server
    let translator: Arc<dyn Translator> = engine;
    let app = create_router(config.clone(), translator)?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 6: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
