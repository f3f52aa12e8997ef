//! Blood Token CLI
//!
//! Command-line front end for the Blood Token bounty list.

mod app;
mod commands;
mod style;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use style::*;

#[derive(Parser)]
#[command(name = "bounty")]
#[command(version)]
#[command(about = "Blood Token - manage the Kill Tracker bounty list", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to config.toml
    #[arg(short, long, env = "BOUNTY_CONFIG", default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Local cache database (overrides config)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current bounty list (default)
    #[command(visible_alias = "ls")]
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the bounty list format example
    Template,

    /// Replace the list with bounty text from a file (stdin if omitted)
    Set {
        file: Option<PathBuf>,
    },

    /// Add a target, or change the requirement of an existing one
    Add {
        handle: String,

        /// Kill requirement, e.g. "Must kill with knife"
        requirement: Vec<String>,
    },

    /// Remove a target
    #[command(visible_alias = "rm")]
    Remove { handle: String },

    /// Edit the list in $EDITOR
    #[command(visible_alias = "e")]
    Edit,

    /// Show previously saved lists
    History {
        /// Number of revisions to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Show a single revision
        #[arg(long)]
        id: Option<i64>,
    },

    /// Show effective configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    let result = app::App::open(&cli.config, cli.db.as_deref(), cli.verbose).and_then(|app| {
        match cli.command.unwrap_or(Commands::Show { json: false }) {
            Commands::Show { json } => commands::show::run(&app, json),
            Commands::Template => commands::show::template(),
            Commands::Set { file } => commands::set::run(&app, file.as_deref()),
            Commands::Add {
                handle,
                requirement,
            } => commands::set::add(&app, &handle, &requirement.join(" ")),
            Commands::Remove { handle } => commands::set::remove(&app, &handle),
            Commands::Edit => commands::edit::run(&app),
            Commands::History { limit, id } => match id {
                Some(id) => commands::history::show(&app, id),
                None => commands::history::run(&app, limit),
            },
            Commands::Config => commands::config::run(&app),
        }
    });

    if let Err(e) = result {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
