//! Startup error types

use thiserror::Error;

/// Errors that can abort server startup or surface while closing the
/// database connection.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("invalid database configuration: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = ServerError::Config("MONGODB_HOST must not be empty".to_string());
        assert_eq!(
            error.to_string(),
            "invalid database configuration: MONGODB_HOST must not be empty"
        );
    }
}
