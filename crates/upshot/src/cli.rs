//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Publish creative-application session files to their next version.
#[derive(Debug, Parser)]
#[command(name = "upshot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report whether the session could publish right now
    Check(commands::check::CheckArgs),

    /// Save the session to its next version
    Up(commands::up::UpArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Check(args) => commands::check::run(args),
            Commands::Up(args) => commands::up::run(args),
        }
    }
}
