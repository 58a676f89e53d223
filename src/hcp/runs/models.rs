//! Run data models

use serde::{Deserialize, Serialize};

use crate::hcp::models::WorkspaceRelationship;

/// Request payload for creating a run
#[derive(Serialize, Debug)]
pub struct CreateRunRequest {
    pub data: CreateRunData,
}

/// Data part of create run request
#[derive(Serialize, Debug)]
pub struct CreateRunData {
    #[serde(rename = "type")]
    pub data_type: String,
    pub attributes: CreateRunAttributes,
    pub relationships: WorkspaceRelationship,
}

/// Attributes for create run request
#[derive(Serialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub struct CreateRunAttributes {
    pub auto_apply: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CreateRunRequest {
    /// Create an auto-applying run for a workspace
    pub fn new(workspace_id: &str, message: Option<&str>) -> Self {
        Self {
            data: CreateRunData {
                data_type: "runs".to_string(),
                attributes: CreateRunAttributes {
                    auto_apply: true,
                    message: message.map(str::to_string),
                },
                relationships: WorkspaceRelationship::new(workspace_id),
            },
        }
    }
}

/// Run data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Run {
    pub id: String,
    #[serde(default)]
    pub attributes: RunAttributes,
}

/// Run attributes from TFE API
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RunAttributes {
    pub status: Option<String>,
}

impl Run {
    /// Get run status, defaulting to "unknown" if not available
    pub fn status(&self) -> &str {
        self.attributes.status.as_deref().unwrap_or("unknown")
    }
}
