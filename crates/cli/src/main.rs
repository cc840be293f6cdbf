use clap::Parser;

use stockdesk_cli::{Cli, Snapshot, execute};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.log_level.as_deref() {
        Some(directive) => stockdesk_observability::init_with_filter(directive),
        None => stockdesk_observability::init(),
    }

    let snapshot = Snapshot::load(&cli.snapshot)?;
    let output = execute(&cli.command, cli.format, &snapshot)?;
    println!("{output}");
    Ok(())
}
