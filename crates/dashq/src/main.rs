//! dashq - A CLI to explore Amazon QuickSight dashboard metadata

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod banner;
mod cli;
mod commands;
mod output;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Handle dynamic shell completions (when invoked via COMPLETE=<shell> dashq)
    clap_complete::CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose > 0 {
        match cli.verbose {
            1 => "dashq=debug,dashq_core=debug,dashq_client=debug",
            _ => "dashq=trace,dashq_core=trace,dashq_client=trace",
        }
    } else if cli.quiet {
        "error"
    } else {
        "dashq=info,dashq_core=info,dashq_client=info"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(EnvFilter::new(filter))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    cli.run().await
}
