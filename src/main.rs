//! scratch2exe CLI - compile Scratch projects to native executables
//!
//! Downloads a project descriptor from the Scratch API, hands it to the
//! external `scratchnative` transpiler, and optionally runs the system
//! C/C++ compiler on the generated source.
//!
//! ## Pipeline
//!
//! ```text
//! Scratch API → <json>.sb3 → scratchnative → output.cpp → cc/c++ → OUTPUT
//! ```

mod cli;
mod commands;
mod error;
mod exec;
mod project;
mod utils;

use clap::Parser;

use cli::Cli;
use error::Scratch2ExeError;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.execute() {
        match err.downcast_ref::<Scratch2ExeError>() {
            Some(e) => e.display_with_hints(),
            None => utils::terminal::print_error(&format!("{err:#}")),
        }
        std::process::exit(1);
    }
}
