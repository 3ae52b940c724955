//! Remote Scratch project lookup and download
//!
//! The Scratch API hands out project descriptors in two steps: a metadata
//! lookup on `api.scratch.mit.edu` that yields a short-lived project token,
//! then the descriptor itself from `projects.scratch.mit.edu` using that
//! token. Both base URLs can be overridden through environment variables,
//! which is also how the integration tests point the CLI at a local stub.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::{hints, Scratch2ExeError};

/// Default metadata endpoint
const DEFAULT_API_BASE: &str = "https://api.scratch.mit.edu";

/// Default descriptor download endpoint
const DEFAULT_PROJECTS_BASE: &str = "https://projects.scratch.mit.edu";

/// Metadata returned by the Scratch API for a shared project
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectInfo {
    /// Project id
    pub id: u64,

    /// Project title
    pub title: String,

    /// Download token, required since 2022 for descriptor access.
    /// Absent on some older API responses.
    #[serde(default)]
    pub project_token: Option<String>,
}

/// Blocking HTTP client for the Scratch project API
pub struct ProjectClient {
    api_base: String,
    projects_base: String,
    client: reqwest::blocking::Client,
}

impl ProjectClient {
    /// Create a client with timeouts and a crate user agent
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("scratch2exe/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            api_base: base_url("SCRATCH_API_BASE", DEFAULT_API_BASE),
            projects_base: base_url("SCRATCH_PROJECTS_BASE", DEFAULT_PROJECTS_BASE),
            client,
        })
    }

    /// Look up project metadata (title and download token)
    pub fn lookup(&self, project_id: u64) -> Result<ProjectInfo> {
        let url = format!("{}/projects/{}", self.api_base, project_id);

        let response = self.client.get(&url).send().map_err(|e| {
            Scratch2ExeError::fetch_error(
                project_id,
                format!("request to {} failed", url),
                Some(e.into()),
                None,
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            let hint = if status == reqwest::StatusCode::NOT_FOUND {
                Some(hints::project_not_found().to_string())
            } else {
                None
            };
            return Err(Scratch2ExeError::fetch_error(
                project_id,
                format!("HTTP {}", status.as_u16()),
                None,
                hint,
            )
            .into());
        }

        let info: ProjectInfo = response.json().map_err(|e| {
            Scratch2ExeError::fetch_error(
                project_id,
                "invalid project metadata",
                Some(e.into()),
                None,
            )
        })?;

        Ok(info)
    }

    /// Download the project descriptor to `dest`, overwriting any previous copy
    pub fn download(&self, info: &ProjectInfo, dest: &Path) -> Result<()> {
        let url = match &info.project_token {
            Some(token) => format!("{}/{}?token={}", self.projects_base, info.id, token),
            None => format!("{}/{}", self.projects_base, info.id),
        };

        let response = self.client.get(&url).send().map_err(|e| {
            Scratch2ExeError::fetch_error(
                info.id,
                "descriptor download failed",
                Some(e.into()),
                None,
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Scratch2ExeError::fetch_error(
                info.id,
                format!("descriptor download returned HTTP {}", status.as_u16()),
                None,
                None,
            )
            .into());
        }

        let bytes = response
            .bytes()
            .map_err(|e| {
                Scratch2ExeError::fetch_error(
                    info.id,
                    "descriptor download interrupted",
                    Some(e.into()),
                    None,
                )
            })?;

        fs::write(dest, &bytes)
            .with_context(|| format!("Failed to write descriptor to {}", dest.display()))?;

        Ok(())
    }
}

/// Path of the on-disk descriptor for a given `--json` value.
///
/// The `.sb3` suffix is fixed: `--json project.json` lands in
/// `project.json.sb3`, matching what the transpiler expects.
pub fn descriptor_path(json_name: &str) -> PathBuf {
    PathBuf::from(format!("{}.sb3", json_name))
}

fn base_url(var: &str, default: &str) -> String {
    match std::env::var(var) {
        Ok(v) if !v.is_empty() => v.trim_end_matches('/').to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_info_deserialization() {
        let json = r#"{
            "id": 60917032,
            "title": "Paper Minecraft",
            "project_token": "1700000000_abcdef",
            "visibility": "visible"
        }"#;

        let info: ProjectInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.id, 60917032);
        assert_eq!(info.title, "Paper Minecraft");
        assert_eq!(info.project_token.as_deref(), Some("1700000000_abcdef"));
    }

    #[test]
    fn test_project_info_without_token() {
        let json = r#"{"id": 104, "title": "old project"}"#;

        let info: ProjectInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.id, 104);
        assert!(info.project_token.is_none());
    }

    #[test]
    fn test_descriptor_path_appends_sb3() {
        assert_eq!(
            descriptor_path("project.json"),
            PathBuf::from("project.json.sb3")
        );
        assert_eq!(descriptor_path("my-game"), PathBuf::from("my-game.sb3"));
    }
}
