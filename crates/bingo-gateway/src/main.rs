use bingo_gateway::cli::{Cli, StorageBackendArg};
use bingo_gateway::{App, AppState};
use bingo_generator::RandomGenerator;
use bingo_storage::{InMemoryRepository, PostgresRepository};
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse();
    let _telemetry = bingo_telemetry::init(&config.telemetry())?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        log_format = %config.log_format,
        "starting gateway"
    );

    let state = match config.storage {
        StorageBackendArg::InMemory => {
            warn!("using in-memory storage, saved cards are lost on restart");
            AppState::with_repository(InMemoryRepository::new(), RandomGenerator::new())
        }
        StorageBackendArg::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or("database url is required when storage backend is postgres")?;
            let repository = PostgresRepository::connect(database_url).await?;
            repository.migrate().await?;
            AppState::with_repository(repository, RandomGenerator::new())
        }
    };

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received ctrl-c, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
