//! Server lifecycle ordering
//!
//! Startup is strictly sequential in `main`: configuration, then the
//! database connection, then the router, then the listener. This module
//! covers the other end of the lifecycle: resolving the shutdown signal and
//! making sure the database close step runs exactly once after the server
//! loop returns, whatever the loop's outcome was.

use std::fmt::Display;
use std::future::Future;

use tokio::signal;
use tracing::{error, info};

/// Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
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

    info!("Shutdown signal received");
}

/// Drive the server loop to completion, then run the close step.
///
/// Close always runs, even when serving failed, and a close failure is
/// logged and swallowed; the caller only ever sees the serve outcome.
pub async fn run<S, C, E, CE>(serve: S, close: C) -> Result<(), E>
where
    S: Future<Output = Result<(), E>>,
    C: Future<Output = Result<(), CE>>,
    CE: Display,
{
    let served = serve.await;

    info!("Closing connection with MongoDB...");
    match close.await {
        Ok(()) => info!("Closed connection with MongoDB!"),
        Err(err) => error!(%err, "Failed to close MongoDB connection"),
    }

    served
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_close_runs_even_when_serve_fails() {
        let closed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&closed);

        let result: Result<(), io::Error> = run(
            async { Err(io::Error::new(io::ErrorKind::AddrInUse, "bind failed")) },
            async move {
                flag.store(true, Ordering::SeqCst);
                Ok::<(), io::Error>(())
            },
        )
        .await;

        assert!(result.is_err());
        assert!(closed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_close_failure_is_swallowed() {
        let result: Result<(), io::Error> = run(
            async { Ok(()) },
            async { Err(io::Error::new(io::ErrorKind::Other, "close failed")) },
        )
        .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_serve_success_passes_through() {
        let result: Result<(), io::Error> =
            run(async { Ok(()) }, async { Ok::<(), io::Error>(()) }).await;

        assert!(result.is_ok());
    }
}
