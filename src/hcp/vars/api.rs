//! Workspace variable API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::TfeClient;

use super::models::{CreateVariableRequest, Variable, VariableResponse};

impl TfeClient {
    /// Create a single terraform variable on a workspace
    ///
    /// Uses POST /workspaces/:workspace_id/vars. Any 201 counts as success;
    /// the created variable is returned only when the body describes it.
    /// Values of sensitive variables are never logged.
    pub async fn create_variable(
        &self,
        workspace_id: &str,
        key: &str,
        value: &str,
        sensitive: bool,
    ) -> Result<Option<Variable>> {
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::WORKSPACES,
            urlencoding::encode(workspace_id),
            api::VARS
        );

        debug!(
            "Creating {}variable '{}' on workspace {}",
            if sensitive { "sensitive " } else { "" },
            key,
            workspace_id
        );

        let request = CreateVariableRequest::new(key, value, sensitive, workspace_id);
        let response = self.post(&url).json(&request).send().await?;

        let body = self
            .expect_created(
                response,
                &format!(
                    "Failed to create variable '{}' on workspace '{}'",
                    key, workspace_id
                ),
            )
            .await?;

        match serde_json::from_str::<VariableResponse>(&body) {
            Ok(created) => Ok(Some(created.data)),
            Err(e) => {
                debug!("Created variable '{}', response not parsed: {}", key, e);
                Ok(None)
            }
        }
    }
}
