//! Error types and helpers for user-friendly error messages
//!
//! Every external collaborator (the Scratch API, the scratchnative
//! transpiler, the system compiler) gets a dedicated variant carrying an
//! actionable hint, so a failed pipeline tells the user what to fix.

use thiserror::Error;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum Scratch2ExeError {
    /// Remote project lookup or download failed
    #[error("Failed to fetch project {project_id}: {message}")]
    Fetch {
        project_id: u64,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        hint: Option<String>,
    },

    /// Tool/executable not found or misconfigured
    #[error("Missing tool: {tool}")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// An external tool exited with a non-zero status
    #[error("{tool} failed with exit code {exit_code}")]
    ToolFailure {
        tool: String,
        exit_code: i32,
        hint: Option<String>,
    },
}

impl Scratch2ExeError {
    /// Create a fetch error with a hint
    pub fn fetch_error(
        project_id: u64,
        message: impl Into<String>,
        source: Option<anyhow::Error>,
        hint: Option<String>,
    ) -> Self {
        Self::Fetch {
            project_id,
            message: message.into(),
            source,
            hint,
        }
    }

    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a tool failure error
    pub fn tool_failure(tool: impl Into<String>, exit_code: i32, hint: Option<String>) -> Self {
        Self::ToolFailure {
            tool: tool.into(),
            exit_code,
            hint,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        match self {
            Scratch2ExeError::Fetch { hint, .. } | Scratch2ExeError::ToolFailure { hint, .. } => {
                if let Some(h) = hint {
                    eprintln!("\n{} {}", style("HINT:").yellow().bold(), h);
                }
            }
            Scratch2ExeError::MissingTool { hint, .. } => {
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
        }

        if let Scratch2ExeError::MissingTool { required_for, .. } = self {
            eprintln!(
                "\n{} {}",
                style("REQUIRED FOR:").cyan().bold(),
                required_for
            );
        }

        eprintln!();
    }
}

/// Common error hints for missing tools
pub mod hints {
    /// Get hint for a missing scratchnative transpiler
    pub fn scratchnative() -> &'static str {
        "Build scratchnative from source:\n\
         • git clone https://github.com/scratchnative/scratchnative\n\
         • cmake -B build && cmake --build build\n\
         \n\
         Then either add it to your PATH or pass --scratchnative /path/to/scratchnative."
    }

    /// Get hint for a missing C compiler
    pub fn cc() -> &'static str {
        "Install a C compiler:\n\
         • macOS: xcode-select --install\n\
         • Ubuntu: sudo apt install gcc\n\
         • Windows: winget install mingw-w64"
    }

    /// Get hint for a missing C++ compiler
    pub fn cxx() -> &'static str {
        "Install a C++ compiler:\n\
         • macOS: xcode-select --install\n\
         • Ubuntu: sudo apt install g++\n\
         • Windows: winget install mingw-w64"
    }

    /// Get hint shown when a project cannot be fetched
    pub fn project_not_found() -> &'static str {
        "Check the project id (the number in the project URL,\n\
         e.g. https://scratch.mit.edu/projects/60917032/) and make sure\n\
         the project is shared."
    }

    /// Get fallback hint for an unknown tool
    pub fn generic(tool: &str) -> String {
        format!("Install '{}' and ensure it's in your PATH", tool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_message() {
        let err = Scratch2ExeError::missing_tool(
            "scratchnative",
            "project transpilation",
            hints::scratchnative(),
        );
        assert_eq!(err.to_string(), "Missing tool: scratchnative");
    }

    #[test]
    fn test_tool_failure_message() {
        let err = Scratch2ExeError::tool_failure("c++", 1, None);
        assert_eq!(err.to_string(), "c++ failed with exit code 1");
    }

    #[test]
    fn test_fetch_error_message() {
        let err = Scratch2ExeError::fetch_error(
            60917032,
            "HTTP 404",
            None,
            Some(hints::project_not_found().to_string()),
        );
        assert!(err.to_string().contains("60917032"));
        assert!(err.to_string().contains("HTTP 404"));
    }
}
