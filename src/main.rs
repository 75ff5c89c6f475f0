use std::io;

use catalan::cli::{self, Cli};
use clap::Parser;

fn main() {
    // Logs go to stderr so stdout carries nothing but the sequence
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = cli::run(&cli, &mut out) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
