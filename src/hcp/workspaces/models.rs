//! Workspace data models

use serde::{Deserialize, Serialize};

use crate::hcp::traits::TfeResource;

/// Request payload for creating a no-code workspace
#[derive(Serialize, Debug)]
pub struct CreateWorkspaceRequest {
    pub data: CreateWorkspaceData,
}

/// Data part of create workspace request
#[derive(Serialize, Debug)]
pub struct CreateWorkspaceData {
    #[serde(rename = "type")]
    pub data_type: String,
    pub attributes: CreateWorkspaceAttributes,
}

/// Attributes for create workspace request
#[derive(Serialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub struct CreateWorkspaceAttributes {
    pub name: String,
    pub source_module_id: String,
    pub auto_apply: bool,
}

impl CreateWorkspaceRequest {
    /// Create an auto-applying workspace sourced from a registry module
    pub fn new(name: &str, module_id: &str) -> Self {
        Self {
            data: CreateWorkspaceData {
                data_type: "workspaces".to_string(),
                attributes: CreateWorkspaceAttributes {
                    name: name.to_string(),
                    source_module_id: module_id.to_string(),
                    auto_apply: true,
                },
            },
        }
    }
}

/// Workspace data from TFE API
///
/// Only `id` is required; a 201 without attributes still counts as created.
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
    #[serde(default)]
    pub attributes: WorkspaceAttributes,
}

/// Workspace attributes from TFE API
#[derive(Deserialize, Debug, Clone, Default)]
pub struct WorkspaceAttributes {
    #[serde(default)]
    pub name: String,
}

impl TfeResource for Workspace {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}
