//! Build command implementation
//!
//! Runs the full pipeline: fetch → transpile → [compile] → cleanup.
//! Every external step has its exit status checked; a failing step aborts
//! the pipeline before cleanup so intermediate files survive for debugging.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use crate::commands::fetch::download_descriptor;
use crate::error::Scratch2ExeError;
use crate::exec::subprocess::{run_command, RunOutcome};
use crate::project::ProjectClient;
use crate::utils::terminal::{print_detail, print_step, print_success};
use crate::utils::tools::{require_tool, tool_version};

/// Intermediate source file between the transpile and compile steps
const TRANSPILED_SOURCE: &str = "output.cpp";

/// Fetch, transpile and compile a project to a native executable
#[derive(Args, Debug)]
pub struct BuildCommand {
    /// Scratch project id (the number in the project URL)
    pub project_id: u64,

    /// Skip native compilation; the transpiled source becomes the output
    #[arg(short = 'c', long = "skip-compile")]
    pub skip_compile: bool,

    /// Compile with the system C compiler instead of C++
    #[arg(long = "to_c")]
    pub to_c: bool,

    /// Output path for the final artifact
    #[arg(short = 'o', long, default_value = "output")]
    pub output: String,

    /// Descriptor filename; ".sb3" is appended on disk
    #[arg(long = "json", value_name = "NAME", default_value = "project.json")]
    pub json: String,

    /// Path to the scratchnative transpiler executable
    #[arg(
        long = "scratchnative",
        value_name = "PATH",
        default_value = "scratchnative"
    )]
    pub scratchnative: String,
}

impl BuildCommand {
    /// Execute the build command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let client = ProjectClient::new()?;
        let descriptor = download_descriptor(&client, self.project_id, &self.json, verbose)?;

        self.transpile(&descriptor, verbose)?;

        if !self.skip_compile {
            self.compile(verbose)?;
            fs::remove_file(TRANSPILED_SOURCE)
                .with_context(|| format!("Failed to remove intermediate {}", TRANSPILED_SOURCE))?;
        }

        fs::remove_file(&descriptor)
            .with_context(|| format!("Failed to remove descriptor {}", descriptor.display()))?;

        print_success("Project Built!");
        Ok(())
    }

    /// Path the transpiler writes to: the final output when compilation
    /// is skipped, the fixed intermediate otherwise
    fn transpile_target(&self) -> &str {
        if self.skip_compile {
            &self.output
        } else {
            TRANSPILED_SOURCE
        }
    }

    /// System compiler selected by --to_c
    fn compiler(&self) -> &'static str {
        if self.to_c {
            "cc"
        } else {
            "c++"
        }
    }

    fn transpile(&self, descriptor: &Path, verbose: bool) -> Result<()> {
        let tool = require_tool(&self.scratchnative, "project transpilation")?;

        print_step("Compiling Scratch project...");
        if verbose {
            print_detail(&format!("transpiler: {}", tool.path.display()));
        }

        let args = vec![
            descriptor.display().to_string(),
            "-o".to_string(),
            self.transpile_target().to_string(),
        ];
        run_tool(
            &self.scratchnative,
            &args,
            "project transpilation",
            format!(
                "The downloaded descriptor {} was kept for debugging.",
                descriptor.display()
            ),
        )
    }

    fn compile(&self, verbose: bool) -> Result<()> {
        let compiler = self.compiler();
        require_tool(compiler, "native compilation")?;

        print_step(&format!(
            "Compiling {} output...",
            if self.to_c { "C" } else { "C++" }
        ));
        if verbose {
            if let Some(version) = tool_version(compiler) {
                print_detail(&version);
            }
        }

        let args = vec![
            TRANSPILED_SOURCE.to_string(),
            "-o".to_string(),
            self.output.clone(),
        ];
        run_tool(
            compiler,
            &args,
            "native compilation",
            format!("{} was kept for debugging.", TRANSPILED_SOURCE),
        )
    }
}

/// Run an external tool and turn a non-zero exit into a pipeline error
fn run_tool(tool: &str, args: &[String], required_for: &str, failure_hint: String) -> Result<()> {
    match run_command(tool, args)? {
        RunOutcome::NotFound => {
            // The tool disappeared between lookup and spawn
            Err(Scratch2ExeError::missing_tool(
                tool,
                required_for,
                crate::error::hints::generic(tool),
            )
            .into())
        }
        RunOutcome::Finished(result) if !result.success => {
            Err(Scratch2ExeError::tool_failure(tool, result.exit_code, Some(failure_hint)).into())
        }
        RunOutcome::Finished(_) => Ok(()),
    }
}
