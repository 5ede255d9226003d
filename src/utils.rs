//! Process lifecycle helpers.

use std::future::Future;

use tokio::signal;
use tracing::{error, info};

use crate::intake::SubmissionStore;

/// Run `server` to completion, then close `store` whether it stopped
/// cleanly or failed. The server's own result is returned.
pub async fn serve_then_close<F, E>(server: F, store: &dyn SubmissionStore) -> Result<(), E>
where
    F: Future<Output = Result<(), E>>,
{
    let served = server.await;
    store.shutdown().await;
    served
}

/// Resolves on Ctrl+C or SIGTERM, whichever comes first.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::MemoryStore;

    #[tokio::test]
    async fn store_is_closed_after_clean_stop() {
        let store = MemoryStore::new();

        let result: Result<(), std::io::Error> = serve_then_close(async { Ok(()) }, &store).await;

        assert!(result.is_ok());
        assert!(store.is_closed());
    }

    #[tokio::test]
    async fn store_is_closed_when_server_fails() {
        let store = MemoryStore::new();
        let failing = async { Err(std::io::Error::other("accept failed")) };

        let err = serve_then_close(failing, &store).await.unwrap_err();

        assert_eq!(err.to_string(), "accept failed");
        assert!(store.is_closed());
    }
}
