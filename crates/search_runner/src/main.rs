//! Search runner.
//!
//! Loads one or more believed battle states from JSON, searches each one,
//! averages the payoff matrices, and prints the action to play.
//!
//! Usage:
//!   cargo run -p search_runner -- search state.json
//!   cargo run -p search_runner -- search a.json b.json --depth 1 --strategy nash
//!   cargo run -p search_runner -- options state.json

mod cmd;
mod models;
mod utils;

use clap::{Parser, Subcommand};
use cmd::{options, search};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "search_runner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search believed states and print the chosen action
    Search(search::SearchArgs),

    /// List both sides' legal options for a state
    Options(options::OptionsArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Search(args)) => search::execute(args),
        Some(Commands::Options(args)) => options::execute(args),
        None => {
            // Require explicit subcommand to avoid flag ambiguity at the root.
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
