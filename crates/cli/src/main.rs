//! CardLoyalty CLI

use std::process;

use clap::Parser;

use crate::cli::Cli;

mod cli;
mod config;
mod logging;
mod output;

/// CardLoyalty CLI entry point
#[tokio::main]
pub async fn main() {
    _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = logging::init_subscriber(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }

    if let Err(error) = cli.run().await {
        #[expect(clippy::print_stderr, reason = "errors are reported on stderr")]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }
}
