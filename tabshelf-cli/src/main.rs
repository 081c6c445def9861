//! tabshelf command line
//!
//! Every snapshot is an explicit user action: nothing here runs on a timer.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use tabshelf_core::{Config, Shelf, SnapshotStrategy};

mod commands;

#[derive(Parser)]
#[command(name = "tabshelf")]
#[command(about = "Save open browser tabs into a bookmark snapshot", long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Bookmark database, overrides the config file
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the stored snapshot with the windows in a session export
    Snapshot {
        /// Session export (JSON) to capture from
        #[arg(long)]
        session: PathBuf,

        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the snapshot tree
    Show,
    /// Export the snapshot as a Netscape bookmark file
    Export {
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    InPlace,
    Staged,
}

impl From<StrategyArg> for SnapshotStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::InPlace => SnapshotStrategy::InPlace,
            StrategyArg::Staged => SnapshotStrategy::Staged,
        }
    }
}

fn load_config(cli: &Cli, strategy: Option<StrategyArg>) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(database) = &cli.database {
        config.database_path = database.clone();
    }
    if let Some(strategy) = strategy {
        config.strategy = strategy.into();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    tabshelf_core::init_logging();

    let cli = Cli::parse();
    let strategy = match &cli.command {
        Commands::Snapshot { strategy, .. } => *strategy,
        _ => None,
    };
    let shelf = Shelf::new(load_config(&cli, strategy)?)?;

    match cli.command {
        Commands::Snapshot { session, json, .. } => {
            commands::snapshot::run(&shelf, &session, json).await?
        }
        Commands::Show => commands::tree::show(&shelf).await?,
        Commands::Export { output } => commands::tree::export(&shelf, output.as_deref()).await?,
    }

    Ok(())
}
