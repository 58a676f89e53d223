//! Runs module

mod api;
mod models;

pub use models::{CreateRunAttributes, CreateRunData, CreateRunRequest, Run, RunAttributes};
