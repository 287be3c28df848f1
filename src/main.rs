//! Brave Date API server

mod config;
mod db;
mod error;
mod lifecycle;
mod routers;
mod routes;
mod state;

use std::future::IntoFuture;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,brave_date_server=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::AppConfig::from_env()?;

    info!("Starting Brave Date Server");

    // Open the database connection before serving anything; a failure here
    // aborts the process with a nonzero exit and no request is ever served.
    let app_state = state::AppState::new(&config).await?;
    let client = app_state.client.clone();

    // Build router
    let app = routes::create_router(app_state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    let serve = axum::serve(listener, app).with_graceful_shutdown(lifecycle::shutdown_signal());
    lifecycle::run(serve.into_future(), db::close(client)).await?;

    Ok(())
}
