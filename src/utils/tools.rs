//! Tool detection and validation
//!
//! Resolves the external tools the pipeline shells out to (scratchnative,
//! cc, c++) before they are invoked, so a missing tool fails with an
//! installation hint instead of an opaque spawn error.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;
use which::which;

use crate::error::{hints, Scratch2ExeError};

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Tool name or user-supplied path
    pub name: String,
    /// Resolved path to the executable
    pub path: PathBuf,
}

/// Check if a tool exists and return its resolved path.
///
/// Values containing a path separator are treated as explicit paths
/// (the `--scratchnative /path/to/bin` case) rather than PATH lookups.
pub fn check_tool(tool: &str) -> Option<ToolInfo> {
    if tool.contains(std::path::MAIN_SEPARATOR) || tool.contains('/') {
        let path = Path::new(tool);
        if path.is_file() {
            return Some(ToolInfo {
                name: tool.to_string(),
                path: path.to_path_buf(),
            });
        }
        return None;
    }

    which(tool).ok().map(|path| ToolInfo {
        name: tool.to_string(),
        path,
    })
}

/// Require a tool to exist, return error with hint if missing
pub fn require_tool(tool: &str, required_for: &str) -> Result<ToolInfo> {
    match check_tool(tool) {
        Some(info) => Ok(info),
        None => Err(Scratch2ExeError::missing_tool(tool, required_for, tool_hint(tool)).into()),
    }
}

/// Get tool version by running `tool --version`, for verbose output
pub fn tool_version(tool: &str) -> Option<String> {
    let output = Command::new(tool).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8_lossy(&output.stdout);
    Some(version.lines().next().unwrap_or("").trim().to_string())
}

/// Get installation hint for a tool
fn tool_hint(tool: &str) -> String {
    match tool {
        "cc" | "gcc" | "clang" => hints::cc().to_string(),
        "c++" | "g++" | "clang++" => hints::cxx().to_string(),
        t if t.contains("scratchnative") => hints::scratchnative().to_string(),
        t => hints::generic(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_check_tool_in_path() {
        let info = check_tool("sh").expect("'sh' should be in PATH");
        assert!(info.path.is_absolute());
    }

    #[test]
    fn test_check_tool_missing() {
        assert!(check_tool("scratch2exe-no-such-tool").is_none());
    }

    #[test]
    fn test_check_tool_explicit_path_missing() {
        assert!(check_tool("/nonexistent/dir/scratchnative").is_none());
    }

    #[test]
    fn test_require_tool_reports_missing() {
        let err = require_tool("scratchnative-missing", "project transpilation").unwrap_err();
        let err = err.downcast_ref::<Scratch2ExeError>().unwrap();
        assert!(matches!(err, Scratch2ExeError::MissingTool { .. }));
    }
}
