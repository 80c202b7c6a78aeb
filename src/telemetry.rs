use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a JSON subscriber filtered by `RUST_LOG`.
///
/// Does nothing if the host already installed a global subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,line_ampacity=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .try_init();
}
