//! bip85 - Derive deterministic child secrets from one master key.
//!
//! Mnemonics, WIF keys, extended keys, hex entropy and Ripple seeds, all
//! reproducible from a single BIP-32 root following BIP-85.

mod commands;

use commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    if let Err(e) = cli.execute() {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
