//! Tracing setup for the binary
//!
//! `RUST_LOG` wins when set. Otherwise `--verbose` selects `debug` and the
//! configured `log_level` applies.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset
pub fn default_directive(log_level: &str, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        log_level.to_string()
    }
}

/// Install the global subscriber, writing to stderr so command output stays clean
pub fn init_tracing(default_directive: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
