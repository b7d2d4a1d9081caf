use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Log to stderr, filtered by `RUST_LOG` (default: warnings and errors only).
pub fn init() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Logging was already initialized");
    }
}
