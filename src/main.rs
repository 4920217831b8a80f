//! qbank CLI entry point.

mod commands;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use commands::config::ConfigCommand;
use commands::list::ListArgs;
use commands::show::ShowArgs;

#[derive(Parser)]
#[command(
    name = "qbank",
    version = qbank::version(),
    about = "Load, filter, and display past-paper question banks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List matching questions (metadata only)
    List(ListArgs),
    /// Display matching questions with rendered content
    Show(ShowArgs),
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    // Diagnostics go to stderr so listing output stays pipeable; skipped
    // records are warnings, visible unless RUST_LOG lowers them
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(LevelFilter::WARN.into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List(args) => commands::list::handle_list(args),
        Commands::Show(args) => commands::show::handle_show(args),
        Commands::Config { command } => commands::config::handle(command),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "qbank", &mut io::stdout());
            Ok(())
        }
    }
}
