//! Subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Default filter directives for a verbosity level.
pub fn default_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn,scascade=info",
        1 => "warn,scascade=debug",
        _ => "warn,scascade=trace",
    }
}

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins over `verbose` when set. Calling this twice is a
/// no-op.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
