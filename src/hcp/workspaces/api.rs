//! Workspace API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::TfeClient;

use super::models::{CreateWorkspaceRequest, Workspace};

impl TfeClient {
    /// Create a workspace sourced from a registry module
    ///
    /// Uses POST /organizations/:org/workspaces. Only 201 counts as success.
    pub async fn create_workspace(
        &self,
        org: &str,
        name: &str,
        module_id: &str,
    ) -> Result<Workspace> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::WORKSPACES
        );

        debug!(
            "Creating workspace '{}' in '{}' from module '{}'",
            name, org, module_id
        );

        let request = CreateWorkspaceRequest::new(name, module_id);
        let response = self.post(&url).json(&request).send().await?;

        let mut workspace: Workspace = self
            .parse_created(
                response,
                &format!("Failed to create workspace '{}' in '{}'", name, org),
            )
            .await?;

        // Responses without attributes still describe the workspace we asked for
        if workspace.attributes.name.is_empty() {
            workspace.attributes.name = name.to_string();
        }

        debug!(
            "Created workspace {} ({})",
            workspace.attributes.name, workspace.id
        );
        Ok(workspace)
    }
}
