//! hoist CLI binary.
//!
//! This is the entry point for the `hoist` command-line tool. It parses
//! arguments with `clap`, initializes logging via `tracing`, and
//! dispatches to the appropriate command handler.

mod cli;
mod commands;

use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::parse();

    let filter = if args.verbose {
        tracing_subscriber::EnvFilter::new("hoist_core=debug,hoist_client=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    commands::dispatch(args).await
}
