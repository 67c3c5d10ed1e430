mod app;
mod config;
mod handlers;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::create_app,
    config::Config,
    state::AppState,
    storage::{DynamoDbRepository, InMemoryRepository},
};

/// carstore - Store and retrieve car records over HTTP
#[derive(Parser, Debug)]
#[command(name = "carstore")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Storage backend for car records
    #[arg(long, value_enum, default_value_t = StorageBackend::Dynamodb, env = "STORAGE")]
    storage: StorageBackend,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, env = "LOG_FORMAT")]
    log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StorageBackend {
    /// DynamoDB table named by TABLE_NAME
    Dynamodb,
    /// Process memory, lost on exit
    Memory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_format);

    let config = Config::from_env();
    let state = init_state(cli.storage, &config).await;
    let app = create_app(state, &config);

    // Behind API Gateway the Lambda runtime drives the router.
    if std::env::var_os("AWS_LAMBDA_RUNTIME_API").is_some() {
        tracing::info!("Starting Lambda runtime");
        return lambda_http::run(app)
            .await
            .map_err(|e| anyhow::anyhow!(e));
    }

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Initialize the tracing subscriber.
///
/// The filter comes from `RUST_LOG`. JSON output suits CloudWatch.
fn init_tracing(format: LogFormat) {
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "carstore=debug,tower_http=debug".into()),
    );

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Build the application state for the selected storage backend.
///
/// A missing table binding does not stop the process: the state records the
/// error and every car request reports it.
async fn init_state(backend: StorageBackend, config: &Config) -> AppState {
    match backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, records are lost on exit");
            AppState::new(Arc::new(InMemoryRepository::new()))
        }
        StorageBackend::Dynamodb => match config.table_name() {
            Ok(table_name) => {
                let repo =
                    DynamoDbRepository::connect(table_name, config.endpoint_url.as_deref())
                        .await;
                tracing::info!(
                    table = repo.table_name(),
                    endpoint = config.endpoint_url.as_deref().unwrap_or("aws"),
                    "Initialized DynamoDB storage"
                );
                AppState::new(Arc::new(repo))
            }
            Err(e) => {
                tracing::error!(error = %e, "DynamoDB storage is not configured");
                AppState::misconfigured(e)
            }
        },
    }
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
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
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
