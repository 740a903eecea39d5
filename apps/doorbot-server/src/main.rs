mod config;
mod logging;
mod signals;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::StatusCode;
use clap::{Parser, Subcommand};
use doorbot::DoorbotModule;
use sea_orm::{ConnectOptions, Database};
use tokio_util::sync::CancellationToken;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, CliOverrides};

/// Doorbot Server - knock notifications and directory sync for intercom accounts
#[derive(Parser)]
#[command(name = "doorbot-server")]
#[command(about = "Doorbot Server - knock notifications and directory sync")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config
        && !Path::new(path).is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // defaults -> YAML -> env (APP__*) -> CLI
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        port: cli.port,
        verbose: cli.verbose,
    });

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_pretty_json()?);
        return Ok(());
    }

    logging::init_logging(&config.logging)?;
    tracing::info!("Doorbot Server starting");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config.socket_addr()?;
    println!("Configuration is valid");
    println!("{}", config.to_pretty_json()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let mut opts = ConnectOptions::new(config.database.dsn.clone());
    opts.max_connections(config.database.max_connections)
        .sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .context("failed to connect to database")?;

    DoorbotModule::migrate(&db).await?;
    let module = DoorbotModule::init(db, &config.doorbot)?;

    let app = module
        .router()
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_millis(config.server.request_timeout_ms),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "HTTP server listening");

    let cancel = CancellationToken::new();
    signals::cancel_on_shutdown_signal(cancel.clone());

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await?;

    // accepted knocks are delivered before the process exits
    module.shutdown().await;
    tracing::info!("Doorbot Server stopped");
    Ok(())
}
