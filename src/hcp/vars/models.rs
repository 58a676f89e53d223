//! Workspace variable data models

use serde::{Deserialize, Serialize};

use crate::config::variables;
use crate::hcp::models::WorkspaceRelationship;
use crate::hcp::traits::TfeResource;

/// Request payload for creating a workspace variable
#[derive(Serialize, Debug)]
pub struct CreateVariableRequest {
    pub data: CreateVariableData,
}

/// Data part of create variable request
#[derive(Serialize, Debug)]
pub struct CreateVariableData {
    #[serde(rename = "type")]
    pub data_type: String,
    pub attributes: CreateVariableAttributes,
    pub relationships: WorkspaceRelationship,
}

/// Attributes for create variable request
#[derive(Serialize, Debug)]
pub struct CreateVariableAttributes {
    pub key: String,
    pub value: String,
    pub description: String,
    pub category: String,
    pub hcl: bool,
    pub sensitive: bool,
}

impl CreateVariableRequest {
    /// Create a literal (non-HCL) terraform variable for a workspace
    pub fn new(key: &str, value: &str, sensitive: bool, workspace_id: &str) -> Self {
        Self {
            data: CreateVariableData {
                data_type: "vars".to_string(),
                attributes: CreateVariableAttributes {
                    key: key.to_string(),
                    value: value.to_string(),
                    description: variables::DESCRIPTION.to_string(),
                    category: variables::CATEGORY.to_string(),
                    hcl: false,
                    sensitive,
                },
                relationships: WorkspaceRelationship::new(workspace_id),
            },
        }
    }
}

/// Body of a create variable response
#[derive(Deserialize, Debug)]
pub struct VariableResponse {
    pub data: Variable,
}

/// Variable data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Variable {
    pub id: String,
    #[serde(default)]
    pub attributes: VariableAttributes,
}

/// Variable attributes from TFE API
///
/// The value is omitted; it is null for sensitive variables anyway.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct VariableAttributes {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub sensitive: bool,
}

impl TfeResource for Variable {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.key
    }
}
