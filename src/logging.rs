use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// Stdout carries the generated source fragment, so all diagnostics go to
/// stderr. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mimegen=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
