//! Database connection manager
//!
//! Owns the lifecycle of the MongoDB client and the database ("engine")
//! handle it is bound to. Credentials travel through the driver's structured
//! `Credential` options, so the plaintext password is never part of a
//! loggable connection string.

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, Credential};
use mongodb::{Client, Database};
use tracing::info;

use crate::config::AppConfig;
use crate::error::ServerError;

const SRV_SCHEME: &str = "mongodb+srv://";

/// Build the credential-free connection URI for a configured host.
///
/// The host setting works with or without the `mongodb+srv://` prefix;
/// both spellings produce the identical URI.
pub fn connection_uri(host: &str) -> String {
    let host = host.strip_prefix(SRV_SCHEME).unwrap_or(host);
    format!("{SRV_SCHEME}{host}/?retryWrites=true&w=majority")
}

/// Reject settings that could never produce a working connection before any
/// network round trip happens.
fn validate(config: &AppConfig) -> Result<(), ServerError> {
    if config.mongodb_username.is_empty() {
        return Err(ServerError::Config(
            "MONGODB_USERNAME must not be empty".to_string(),
        ));
    }
    if config.mongodb_host.is_empty() {
        return Err(ServerError::Config(
            "MONGODB_HOST must not be empty".to_string(),
        ));
    }
    if config.mongodb_database.is_empty() {
        return Err(ServerError::Config(
            "MONGODB_DATABASE must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Open the MongoDB client and bind the engine handle to the configured
/// database.
///
/// Pings the database once so an unreachable host or rejected credentials
/// abort startup instead of failing the first request.
pub async fn connect(config: &AppConfig) -> Result<(Client, Database), ServerError> {
    validate(config)?;

    info!(
        username = %config.mongodb_username,
        host = %config.mongodb_host,
        database = %config.mongodb_database,
        "Connecting to MongoDB..."
    );

    let mut options = ClientOptions::parse(connection_uri(&config.mongodb_host)).await?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.credential = Some(
        Credential::builder()
            .username(config.mongodb_username.clone())
            .password(config.mongodb_password.clone())
            .build(),
    );

    let client = Client::with_options(options)?;
    let engine = client.database(&config.mongodb_database);
    engine.run_command(doc! { "ping": 1 }).await?;

    info!("Connected to MongoDB!");
    Ok((client, engine))
}

/// Close the client's connection pools. Invoked once, from the lifecycle
/// guard, after the server loop has returned.
pub async fn close(client: Client) -> Result<(), ServerError> {
    client.shutdown().await;
    Ok(())
}
