//! Subprocess execution for the transpile and compile steps
//!
//! Tools run with inherited stdio so their diagnostics reach the user
//! directly, and with an explicit argument list (never a shell string).
//! Calls block until the tool exits; no timeout is applied.

use std::io;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code (-1 when killed by a signal)
    pub exit_code: i32,
}

/// Outcome of trying to spawn an external tool
pub enum RunOutcome {
    /// The tool ran to completion (possibly with a non-zero exit)
    Finished(CommandResult),

    /// The tool executable could not be found
    NotFound,
}

/// Run a command with inherited stdio and report how it exited
pub fn run_command(program: &str, args: &[String]) -> Result<RunOutcome> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());

    let status = match cmd.status() {
        Ok(status) => status,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(RunOutcome::NotFound),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to execute {}", program));
        }
    };

    Ok(RunOutcome::Finished(CommandResult {
        success: status.success(),
        exit_code: status.code().unwrap_or(-1),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_run_command_success() {
        let outcome = run_command("true", &[]).unwrap();
        match outcome {
            RunOutcome::Finished(result) => {
                assert!(result.success);
                assert_eq!(result.exit_code, 0);
            }
            RunOutcome::NotFound => panic!("'true' should exist"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_run_command_nonzero_exit() {
        let outcome = run_command("false", &[]).unwrap();
        match outcome {
            RunOutcome::Finished(result) => {
                assert!(!result.success);
                assert_ne!(result.exit_code, 0);
            }
            RunOutcome::NotFound => panic!("'false' should exist"),
        }
    }

    #[test]
    fn test_run_command_missing_tool() {
        let outcome = run_command("scratch2exe-no-such-tool", &[]).unwrap();
        assert!(matches!(outcome, RunOutcome::NotFound));
    }
}
