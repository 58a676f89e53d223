//! Workspace variables module

mod api;
mod models;

pub use models::{
    CreateVariableAttributes, CreateVariableData, CreateVariableRequest, Variable,
    VariableAttributes, VariableResponse,
};
