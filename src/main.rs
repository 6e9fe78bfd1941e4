mod app;
mod config;
mod errors;
mod handlers;
mod models;
mod services;
mod store;

use anyhow::Context;
use axum::Router;
use tokio::{net::TcpListener, signal};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use crate::{
    config::{Config, ServiceConfig},
    services::{QuoteService, TaskService},
    store::Store,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load().context("Failed to load configuration")?;
    let backend = config.storage.backend;
    tracing::info!("Using {:?} storage", backend);

    let task_service = TaskService::new(
        Store::open(backend, &config.tasks.data_dir, "users.csv"),
        Store::open(backend, &config.tasks.data_dir, "tasks.csv"),
    );
    task_service
        .ensure()
        .await
        .context("Failed to prepare user/task storage")?;

    let quote_service = QuoteService::new(
        Store::open(backend, &config.quotes.data_dir, "characters.csv"),
        Store::open(backend, &config.quotes.data_dir, "quotes.csv"),
    );
    quote_service
        .ensure()
        .await
        .context("Failed to prepare character/quote storage")?;

    let shutdown = CancellationToken::new();
    tokio::spawn(watch_signals(shutdown.clone()));

    tokio::try_join!(
        serve(
            "user/task",
            &config.tasks,
            app::task_app(task_service, config.http.max_body_size),
            shutdown.clone(),
        ),
        serve(
            "character/quote",
            &config.quotes,
            app::quote_app(quote_service, config.http.max_body_size),
            shutdown.clone(),
        ),
    )?;

    tracing::info!("Servers stopped");
    Ok(())
}

async fn serve(
    name: &str,
    service: &ServiceConfig,
    app: Router,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let address = service.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {} service to {}", name, address))?;
    tracing::info!("{} service listening on {}", name, address);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .with_context(|| format!("{} service failed", name))
}

async fn watch_signals(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    shutdown.cancel();
}
