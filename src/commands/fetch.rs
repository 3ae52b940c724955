//! Fetch command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::project::{descriptor_path, ProjectClient};
use crate::utils::terminal::{create_spinner, print_detail, print_step, print_success};

/// Download a project descriptor from the Scratch API
#[derive(Args, Debug)]
pub struct FetchCommand {
    /// Scratch project id (the number in the project URL)
    pub project_id: u64,

    /// Descriptor filename; ".sb3" is appended on disk
    #[arg(long = "json", value_name = "NAME", default_value = "project.json")]
    pub json: String,
}

impl FetchCommand {
    /// Execute the fetch command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let client = ProjectClient::new()?;
        let dest = download_descriptor(&client, self.project_id, &self.json, verbose)?;

        print_success(&format!("Fetched project! ({})", dest.display()));
        Ok(())
    }
}

/// Download the project descriptor, shared by `fetch` and `build`.
///
/// Returns the path of the descriptor written to the current directory.
pub(crate) fn download_descriptor(
    client: &ProjectClient,
    project_id: u64,
    json: &str,
    verbose: bool,
) -> Result<PathBuf> {
    let spinner = create_spinner(&format!("Downloading project {}...", project_id));

    let result: Result<_> = (|| {
        let info = client.lookup(project_id)?;
        let dest = descriptor_path(json);
        client.download(&info, &dest)?;
        Ok((info, dest))
    })();

    spinner.finish_and_clear();
    let (info, dest) = result?;

    print_step(&format!("Downloaded \"{}\"", info.title));
    if verbose {
        print_detail(&format!("descriptor: {}", dest.display()));
    }

    Ok(dest)
}
