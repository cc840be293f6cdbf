//! JSON-to-stderr subscriber.
//!
//! Records carry a wall-clock timestamp and their fields, without the module
//! target. A directive that does not parse degrades to `info` instead of
//! failing startup.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "info";

pub fn install_from_env() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    install(filter);
}

pub fn install_with_directive(directive: &str) {
    install(filter_for(directive));
}

/// Parse `directive`, falling back to the default level.
pub fn filter_for(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

fn install(filter: EnvFilter) {
    // A second install finds a global subscriber already set and is dropped.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
