//! Linkrank CLI
//!
//! Rank a directory of HTML pages by sampling and by power iteration.

use clap::Parser;
use linkrank_core::LinkRankError;

mod app;
mod commands;
mod output;

use app::Cli;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(e) = commands::rank::run(&cli) {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<LinkRankError>()
            .map(LinkRankError::exit_code)
            .unwrap_or(linkrank_core::error::exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}
