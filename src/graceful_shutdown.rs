use tokio::signal;
use tracing::warn;

/// Resolves once the process receives Ctrl+C or, on unix, SIGTERM. The
/// server future is raced against this in main.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        signal(SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        result = signal::ctrl_c() => {
            result.expect("Failed to listen for Ctrl+C");
            warn!("Ctrl+C received, draining connections before exit");
        },
        _ = terminate => {
            warn!("SIGTERM received, draining connections before exit");
        }
    }
}
