//! Centralized tracing configuration.

/// Configure tracing once at application startup for the entire process.
/// All actors and spans automatically use this configuration.
///
/// Use the `RUST_LOG` env var to control verbosity:
///
/// ```bash
/// RUST_LOG=debug cargo run    # Show debug logs
/// RUST_LOG=info cargo run     # Show info logs only
/// RUST_LOG=warn cargo run     # Show warnings and errors only
/// ```
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
