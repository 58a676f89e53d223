//! tfdeploy - ephemeral no-code deployments on HCP Terraform / Terraform Enterprise
//!
//! Creates a workspace from a registry module, uploads plain and sensitive
//! variables, and queues an auto-applied run.
//!
//! # Example
//!
//! ```bash
//! export TFC_TOKEN=... TFC_ORG=my-org
//!
//! # Workspace named demo-<uuid>, variables from two files
//! tfdeploy -m nocode-9HE91hoD3kWUjJzy -p demo -v vars.tfvars -s secrets.tfvars
//!
//! # Exact workspace name on Terraform Enterprise, JSON result
//! tfdeploy -u https://tfe.example.com/api/v2 -w my-ws -m nocode-abc --format json
//! ```

pub mod cli;
pub mod config;
pub mod deploy;
pub mod error;
pub mod hcp;
pub mod output;
pub mod tfvars;
pub mod ui;

pub use cli::{Cli, OutputFormat};
pub use deploy::{run_deploy_command, run_url, DeployConfig, DeployOutcome};
pub use error::{Result, TfeError};
pub use hcp::{
    format_base_url, Run, TfeClient, TfeResource, Variable, Workspace, WorkspaceTarget,
};
pub use output::{output_outcome, render_outcome};
pub use tfvars::{load_var_file, VarEntry};
