//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{build::BuildCommand, fetch::FetchCommand};

/// scratch2exe - Scratch to native executable pipeline
///
/// Downloads Scratch projects and compiles them to native executables
/// through the scratchnative transpiler.
#[derive(Parser, Debug)]
#[command(name = "scratch2exe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download a project descriptor from the Scratch API
    Fetch(FetchCommand),

    /// Fetch, transpile and compile a project to a native executable
    Build(BuildCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        match self.command {
            Commands::Fetch(cmd) => cmd.execute(self.verbose),
            Commands::Build(cmd) => cmd.execute(self.verbose),
        }
    }
}
