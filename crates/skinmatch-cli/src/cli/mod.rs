mod commands;
mod print;
mod setup;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use setup::Cli;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    commands::dispatch(cli)
}

/// Logs go to stderr so `--json` output stays parseable. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
