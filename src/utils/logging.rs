use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber, logging to stderr at `level`.
pub fn init(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
