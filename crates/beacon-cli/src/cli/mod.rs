//! CLI entry and dispatch.

use anyhow::Result;
use clap::Parser;

use crate::logging;

mod commands;

#[derive(Parser)]
#[command(name = "beacon")]
#[command(version = "1.0")]
#[command(about = "Beacon - Your Smart Campus Companion")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List the upcoming events shown by the portal carousel
    Events {
        /// Include registration links
        #[arg(long)]
        links: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // File logging is best effort; the portal still runs without it
    let _guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: file logging disabled: {e:#}");
            None
        }
    };

    match cli.command {
        // default to the interactive portal
        None => commands::portal::run(),
        Some(Commands::Events { links }) => commands::events::list(links),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
