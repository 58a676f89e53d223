//! JSON:API building blocks shared across resources

use serde::Serialize;

/// Resource identifier object (`{"id": "...", "type": "..."}`)
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdentifier {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
}

/// To-one relationship wrapper (`{"data": {...}}`)
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub data: ResourceIdentifier,
}

impl Relationship {
    /// Relationship pointing at a workspace
    pub fn workspace(workspace_id: &str) -> Self {
        Self {
            data: ResourceIdentifier {
                id: workspace_id.to_string(),
                resource_type: "workspaces".to_string(),
            },
        }
    }
}

/// Relationships block for resources owned by a workspace
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRelationship {
    pub workspace: Relationship,
}

impl WorkspaceRelationship {
    pub fn new(workspace_id: &str) -> Self {
        Self {
            workspace: Relationship::workspace(workspace_id),
        }
    }
}
