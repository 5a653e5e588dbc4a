use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use onepage_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "onepage")]
#[command(author, version, about = "A terminal one-page viewer with a scroll-synced section menu")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Document to open (shorthand for `run`)
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a document in the TUI
    Run {
        /// Document to open
        file: PathBuf,
    },
    /// List the sections of a document
    Sections {
        /// Document to inspect
        file: PathBuf,
    },
    /// Write the default configuration file
    InitConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // Initialize logging; RUST_LOG overrides the configured level
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match (cli.command, cli.file) {
        (Some(Commands::Run { file }), _) | (None, Some(file)) => {
            commands::run::run(config, &file)
        }
        (Some(Commands::Sections { file }), _) => commands::sections::run(&file),
        (Some(Commands::InitConfig), _) => commands::init_config::run(&config),
        (None, None) => bail!("no document given; try `onepage <file>` or `onepage --help`"),
    }
}
