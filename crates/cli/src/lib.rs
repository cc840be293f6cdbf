//! `stockdesk` command line: run the resolvers over a JSON snapshot.
//!
//! The snapshot is what a screen would hold in memory: units, today's events,
//! the selling point's price list, the goods catalog and the color dictionary.

pub mod args;
pub mod commands;
pub mod snapshot;

pub use args::{Cli, Command, OutputFormat};
pub use commands::execute;
pub use snapshot::Snapshot;
