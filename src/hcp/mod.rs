//! TFE API client module
//!
//! Create-only operations against the Terraform Enterprise / HCP Terraform
//! API v2: workspaces, workspace variables and runs.

mod client;
pub mod models;
pub mod runs;
pub mod traits;
mod url;
pub mod vars;
pub mod workspaces;

pub use client::TfeClient;
pub use models::{Relationship, ResourceIdentifier, WorkspaceRelationship};
pub use runs::Run;
pub use traits::TfeResource;
pub use url::format_base_url;
pub use vars::Variable;
pub use workspaces::{Workspace, WorkspaceTarget};
