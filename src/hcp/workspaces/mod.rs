//! Workspace module

mod api;
mod models;
mod target;

pub use models::{
    CreateWorkspaceAttributes, CreateWorkspaceData, CreateWorkspaceRequest, Workspace,
    WorkspaceAttributes,
};
pub use target::WorkspaceTarget;
