//! Service entry point: provision storage, then serve until signalled.

use property_inventory::config::LISTEN_PORT;
use property_inventory::{
    app, ensure_database_exists, ensure_properties_table, AppState, DbConfig, PropertyRepository,
};
use axum::extract::DefaultBodyLimit;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("property_inventory=info".parse()?),
        )
        .init();

    let db = DbConfig::from_env();
    ensure_database_exists(&db).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect_with(db.connect_options())
        .await?;
    // Provisioning failure is fatal: the process must not serve without the table.
    ensure_properties_table(&pool).await?;
    tracing::info!(database = %db.database, "connected and ensured properties table exists");

    let repo = PropertyRepository::new(pool);
    let state = AppState { repo: repo.clone() };
    let router = app(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(64 * 1024));

    let listener = TcpListener::bind(("0.0.0.0", LISTEN_PORT)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    repo.close().await;
    tracing::info!("connection pool closed, exiting");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };
    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
