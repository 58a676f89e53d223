//! Deployment of a no-code module into an ephemeral workspace

mod config;
mod pipeline;

pub use config::DeployConfig;
pub use pipeline::{run_deploy_command, run_url, DeployOutcome};
