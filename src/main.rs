mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use markdays_core::config::MarkdaysConfig;
use markdays_core::date_range::DateRange;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "markdays")]
#[command(about = "Mark calendar days as completed and keep them on local disk")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mark a day, or unmark it if it is already marked
    Toggle {
        /// Day to toggle (YYYY-MM-DD, "today", "yesterday" or "tomorrow")
        day: String,
    },
    /// List marked days
    List {
        /// Only show days from this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only show days until this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Show whether a day is marked (defaults to today)
    Status { day: Option<String> },
    /// Show how days are displayed
    Legend,
    /// Show config and data paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Toggle { day } => {
            let config = MarkdaysConfig::load()?;
            commands::toggle::run(&config, &day).await
        }
        Commands::List { from, to } => {
            let config = MarkdaysConfig::load()?;
            let range = DateRange::from_args(from.as_deref(), to.as_deref())?;
            commands::list::run(&config, range).await
        }
        Commands::Status { day } => {
            let config = MarkdaysConfig::load()?;
            commands::status::run(&config, day.as_deref()).await
        }
        Commands::Legend => {
            commands::legend::run();
            Ok(())
        }
        Commands::Config => {
            let config = MarkdaysConfig::load()?;
            commands::config::run(&config)
        }
    }
}

/// RUST_LOG wins; otherwise warnings only, or debug with --verbose.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
