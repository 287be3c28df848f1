//! Application state

use std::sync::Arc;

use mongodb::{Client, Database};

use crate::config::AppConfig;
use crate::db;
use crate::error::ServerError;

/// Shared application state
///
/// Populated before the listener binds, so every request handler observes an
/// initialized client and engine. Handles are internally reference-counted;
/// cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    /// MongoDB client handle
    pub client: Client,
    /// Database-bound engine handle; collections are reached through it as
    /// `engine.collection::<T>(..)`
    pub engine: Database,
    /// Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create new application state by opening the database connection
    pub async fn new(config: &AppConfig) -> Result<Self, ServerError> {
        let (client, engine) = db::connect(config).await?;

        Ok(Self {
            client,
            engine,
            config: Arc::new(config.clone()),
        })
    }
}
