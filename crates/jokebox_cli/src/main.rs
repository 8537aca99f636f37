//! jokebox CLI
//!
//! Command-line front end for the jokebox record store.
//!
//! # Commands
//!
//! - `refresh` - Fetch a fresh ring of jokes into the store
//! - `fetch` - Fetch and print one joke without storing it
//! - `show` - Display the joke stored at a slot
//! - `next` - Cycle through a category's display band
//! - `inspect` - Dump slot metadata and previews

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// jokebox command-line tools.
#[derive(Parser)]
#[command(name = "jokebox")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the record file
    #[arg(global = true, short, long, default_value = "temp.dat")]
    path: PathBuf,

    /// Record size in bytes
    #[arg(global = true, short, long, default_value_t = 600)]
    record_size: usize,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a fresh ring of jokes into the store
    Refresh {
        /// Request timeout in seconds
        #[arg(short, long, default_value_t = 10)]
        timeout: u64,
    },

    /// Fetch and print one joke without storing it
    Fetch {
        /// Joke category (Any, Misc, Programming, Christmas, Pun, Spooky, Dark)
        #[arg(short, long, default_value = "Any")]
        category: String,

        /// Request timeout in seconds
        #[arg(short, long, default_value_t = 10)]
        timeout: u64,
    },

    /// Display the joke stored at a slot
    Show {
        /// Slot index to read
        #[arg(short, long)]
        slot: u64,
    },

    /// Cycle through a category's display band
    Next {
        /// Joke category (misc or programming)
        #[arg(short, long)]
        category: String,

        /// Display cursor position within the band
        #[arg(long, default_value_t = 0)]
        cursor: u64,
    },

    /// Dump slot metadata and previews
    Inspect {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Refresh { timeout } => {
            commands::refresh::run(&cli.path, cli.record_size, timeout)?;
        }
        Commands::Fetch { category, timeout } => {
            commands::fetch::run(&category, timeout)?;
        }
        Commands::Show { slot } => {
            commands::show::run(&cli.path, cli.record_size, slot)?;
        }
        Commands::Next { category, cursor } => {
            commands::next::run(&cli.path, cli.record_size, &category, cursor)?;
        }
        Commands::Inspect { format } => {
            commands::inspect::run(&cli.path, cli.record_size, &format)?;
        }
        Commands::Version => {
            println!("jokebox CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("jokebox core v{}", jokebox_core::VERSION);
        }
    }

    Ok(())
}
