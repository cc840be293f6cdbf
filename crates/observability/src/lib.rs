//! Process-wide log output for stockdesk binaries.
//!
//! Every log record is one JSON object on stderr; stdout carries only command
//! output, so it can be piped into other tools.

/// Install the JSON stderr subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Only the first call installs anything.
pub fn init() {
    subscriber::install_from_env();
}

/// Install the JSON stderr subscriber with an explicit filter directive such as
/// `debug` or `stockdesk_inventory=trace`.
pub fn init_with_filter(directive: &str) {
    subscriber::install_with_directive(directive);
}

/// Filter parsing and subscriber assembly.
pub mod subscriber;
