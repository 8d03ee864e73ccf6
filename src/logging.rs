//! Logging setup.
//!
//! `RUST_LOG` takes precedence over the configured level. Output goes to
//! stderr so it never mixes with the calculator display on stdout.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the global subscriber. Only the first call takes effect.
pub fn init(level: &str) {
    INIT.call_once(|| {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn")),
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
