use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use heartpath_cli::commands::solve::{handle_solve_command, PartArg, SolveCommandArgs};
use heartpath_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Dungeon shortest-path solver")]
struct Cli {
    /// Output format for the solution.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the hearts lost on the cheapest path to the boss room.
    Solve {
        /// Problem part the input describes.
        #[arg(long, value_enum, default_value_t = PartArg::A)]
        part: PartArg,
        /// Problem file; reads standard input when omitted or `-`.
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve { part, input } => {
            handle_solve_command(&SolveCommandArgs { part, input }, cli.format)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
