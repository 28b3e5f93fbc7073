pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod provider;
pub mod search;
pub mod services;
pub mod state;

use std::sync::Arc;
use tokio::signal;

use anyhow::Context;
use clap::Parser;
pub use config::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::SharedState;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    config.validate()?;

    init_tracing(&config);

    let Some(command) = cli.command else {
        return run_server(config).await;
    };

    match command {
        Commands::Serve => run_server(config).await,

        Commands::Search { query } => cli::cmd_search(&config, &query.join(" ")).await,

        Commands::Category {
            name,
            query,
            filters,
        } => cli::cmd_search_category(&config, &name, &query.join(" "), &filters).await,

        Commands::Filters { category, field } => {
            cli::cmd_filters(&config, &category, field.as_deref()).await
        }

        Commands::Interactive => cli::cmd_interactive(&config).await,

        Commands::Init => cli::cmd_init(),
    }
}

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    info!(
        "medisearch v{} starting in server mode...",
        env!("CARGO_PKG_VERSION")
    );

    if !config.server.enabled {
        info!("Server disabled in config; nothing to do");
        return Ok(());
    }

    let prometheus_handle = if config.observability.metrics_enabled {
        use metrics_exporter_prometheus::PrometheusBuilder;
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        info!("Prometheus metrics recorder initialized");
        Some(handle)
    } else {
        None
    };

    let port = config.server.port;
    let shared = Arc::new(SharedState::new(config).await?);
    let state = api::create_app_state(shared, prometheus_handle);

    let app = api::router(state).await;
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Web API running at http://0.0.0.0:{}", port);

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => error!("Error listening for shutdown: {}", e),
        }
    });

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}
