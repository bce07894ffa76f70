//! postdeck - terminal browser for WordPress-style content APIs

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

mod browse;
mod cache;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;

use cli::args::GlobalOptions;
use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {}", "Error:".red(), err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Posts {
            filters,
            pagination,
        } => cli::posts::list(&opts, &filters, &pagination).await,
        Commands::Search { term, pagination } => cli::posts::search(&opts, &term, &pagination).await,
        Commands::Tags { pagination } => cli::taxonomy::tags(&opts, &pagination).await,
        Commands::Actors { pagination } => cli::taxonomy::actors(&opts, &pagination).await,
        Commands::Show { id, probe } => cli::show::run(&opts, id, probe).await,
        Commands::Browse => cli::browse::run(&opts).await,
        Commands::Version => {
            println!("postdeck version {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Errors only by default, debug output from this crate with --debug.
/// RUST_LOG overrides both.
fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Error)
        .format_timestamp(None)
        .format_target(false);
    if debug {
        builder.filter_module(env!("CARGO_CRATE_NAME"), LevelFilter::Debug);
    }
    builder.parse_default_env();
    let _ = builder.try_init();
}
