use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use consultants::{
    app::create_app, config::Config, state::AppState, storage::DynamoDbRepository,
};
use consultants_core::storage::ConsultantRepository;

/// Storage backend for the local server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Storage {
    /// Process-local map, lost on exit
    #[cfg(feature = "inmemory")]
    Memory,
    /// DynamoDB table from TABLE_NAME
    Dynamodb,
}

/// Consultants - serve the consultant API locally
#[derive(Parser, Debug)]
#[command(name = "consultants")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Storage backend
    #[arg(long, value_enum, default_value_t = default_storage(), env = "STORAGE")]
    storage: Storage,
}

#[cfg(feature = "inmemory")]
fn default_storage() -> Storage {
    Storage::Memory
}

#[cfg(not(feature = "inmemory"))]
fn default_storage() -> Storage {
    Storage::Dynamodb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "consultants=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let repository: Arc<dyn ConsultantRepository> = match cli.storage {
        #[cfg(feature = "inmemory")]
        Storage::Memory => Arc::new(consultants::storage::InMemoryRepository::new()),
        Storage::Dynamodb => Arc::new(DynamoDbRepository::from_config(&config).await),
    };

    tracing::info!(storage = ?cli.storage, table = %config.table_name, "Storage initialized");

    let app = create_app(AppState::new(repository), config.request_timeout());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
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
