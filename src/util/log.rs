use tracing_subscriber::EnvFilter;

/// Initialize structured logging with tracing.
///
/// Log level can be controlled via RUST_LOG env var; defaults to "info".
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
