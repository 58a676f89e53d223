//! Run API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::hcp::TfeClient;

use super::models::{CreateRunRequest, Run};

impl TfeClient {
    /// Queue an auto-applying run on a workspace
    ///
    /// Sends POST /runs with the workspace as relationship.
    pub async fn create_run(&self, workspace_id: &str, message: Option<&str>) -> Result<Run> {
        let url = format!("{}/{}", self.base_url(), api::RUNS);

        debug!("Creating run for workspace {}", workspace_id);

        let request = CreateRunRequest::new(workspace_id, message);
        let response = self.post(&url).json(&request).send().await?;

        let run: Run = self
            .parse_created(
                response,
                &format!("Failed to create run for workspace '{}'", workspace_id),
            )
            .await?;

        debug!("Created run {} (status: {})", run.id, run.status());
        Ok(run)
    }
}
