//! Deployment pipeline: workspace, variables, run

use log::{debug, info};
use serde::Serialize;
use std::path::Path;

use crate::error::Result;
use crate::hcp::{TfeClient, TfeResource};
use crate::tfvars::{load_var_file, VarEntry};
use crate::ui::{create_spinner, finish_spinner};

use super::config::DeployConfig;

/// Result of a successful deployment
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    /// Workspace ID
    pub workspace: String,
    pub workspace_name: String,
    pub run_id: String,
    /// `<base>/app/<org>/workspaces/<workspace>/runs/<run>`
    pub url: String,
    /// Number of variables created (plain and sensitive)
    pub variables: usize,
}

/// Variables loaded from one file, tagged with their sensitivity
struct VarBatch {
    entries: Vec<VarEntry>,
    sensitive: bool,
}

/// Build the reported URL for a run
///
/// `base_url` is the validated API base, used as given.
pub fn run_url(base_url: &str, org: &str, workspace_id: &str, run_id: &str) -> String {
    format!(
        "{}/app/{}/workspaces/{}/runs/{}",
        base_url,
        org,
        workspace_id,
        run_id
    )
}

/// Run the full deployment
///
/// Variable files are read before any API call. After that, every step
/// needs a 201 from the API; the first failure stops the pipeline and
/// nothing already created is rolled back.
pub async fn run_deploy_command(
    client: &TfeClient,
    config: &DeployConfig,
    quiet: bool,
) -> Result<DeployOutcome> {
    let batches = load_batches(config)?;

    let name = config.target.resolve_name();
    let spinner = create_spinner(&format!("Creating workspace '{}'...", name), quiet);
    let workspace = match client
        .create_workspace(&config.org, &name, &config.module_id)
        .await
    {
        Ok(workspace) => {
            finish_spinner(spinner, "Workspace created");
            workspace
        }
        Err(e) => {
            finish_spinner(spinner, "Failed to create workspace");
            return Err(e);
        }
    };
    info!("Created workspace {}", workspace.label());

    let variables = upload_variables(client, workspace.id(), &batches, quiet).await?;

    let spinner = create_spinner("Queuing run...", quiet);
    let run = match client
        .create_run(workspace.id(), config.message.as_deref())
        .await
    {
        Ok(run) => {
            finish_spinner(spinner, "Run queued");
            run
        }
        Err(e) => {
            finish_spinner(spinner, "Failed to queue run");
            return Err(e);
        }
    };
    info!("Queued run {} on workspace {}", run.id, workspace.id());

    Ok(DeployOutcome {
        url: run_url(&config.base_url, &config.org, workspace.id(), &run.id),
        workspace: workspace.id,
        workspace_name: workspace.attributes.name,
        run_id: run.id,
        variables,
    })
}

/// Load the plain file first, then the sensitive one
fn load_batches(config: &DeployConfig) -> Result<Vec<VarBatch>> {
    let files: [(Option<&Path>, bool); 2] = [
        (config.variables.as_deref(), false),
        (config.sensitive.as_deref(), true),
    ];

    let mut batches = Vec::new();
    for (path, sensitive) in files {
        let Some(path) = path else {
            continue;
        };
        let entries = load_var_file(path)?;
        debug!(
            "{} {} variable(s) from {}",
            if sensitive { "Sensitive:" } else { "Plain:" },
            entries.len(),
            path.display()
        );
        batches.push(VarBatch { entries, sensitive });
    }
    Ok(batches)
}

/// Create one workspace variable per entry, stopping at the first failure
async fn upload_variables(
    client: &TfeClient,
    workspace_id: &str,
    batches: &[VarBatch],
    quiet: bool,
) -> Result<usize> {
    let total: usize = batches.iter().map(|b| b.entries.len()).sum();
    if total == 0 {
        debug!("No variables to upload");
        return Ok(0);
    }

    let spinner = create_spinner(&format!("Setting {} variable(s)...", total), quiet);
    let mut created = 0;

    for batch in batches {
        for entry in &batch.entries {
            if let Some(s) = &spinner {
                s.set_message(format!("Setting variable '{}'...", entry.key));
            }
            let result = client
                .create_variable(workspace_id, &entry.key, &entry.value, batch.sensitive)
                .await;
            match result {
                Ok(Some(variable)) => debug!("Created variable {}", variable.label()),
                Ok(None) => debug!("Created variable '{}'", entry.key),
                Err(e) => {
                    finish_spinner(spinner, "Failed to set variables");
                    return Err(e);
                }
            }
            created += 1;
        }
    }

    finish_spinner(spinner, &format!("{} variable(s) set", created));
    info!("Set {} variable(s) on workspace {}", created, workspace_id);
    Ok(created)
}
