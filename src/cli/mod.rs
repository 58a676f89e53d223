//! CLI argument parsing

mod common;

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::config::{defaults, env};

pub use common::OutputFormat;

/// Deploy a no-code module into an ephemeral HCP Terraform workspace
#[derive(Parser, Debug)]
#[command(name = "tfdeploy")]
#[command(version)]
#[command(
    about = "Create an ephemeral workspace from a no-code module, set its variables and apply",
    long_about = "Create an ephemeral HCP Terraform / Terraform Enterprise workspace from a \
                  registry module, upload plain and sensitive variables from .tfvars files, \
                  and queue an auto-applied run.\n\n\
                  Credentials are read from the TFC_TOKEN and TFC_ORG environment variables."
)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["workspace", "prefix"])
))]
pub struct Cli {
    /// TFE API URL, blank for HCP Terraform (https://app.terraform.io/api/v2)
    #[arg(short, long, env = env::URL)]
    pub url: Option<String>,

    /// Workspace name (required if not using --prefix)
    #[arg(short, long)]
    pub workspace: Option<String>,

    /// Workspace prefix, a random UUID suffix is appended (required if not using --workspace)
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// No-code module ID, e.g. nocode-9HE91hoD3kWUjJzy
    #[arg(short, long)]
    pub module: String,

    /// Path to a .tfvars file with variables to set in the workspace
    #[arg(short, long)]
    pub variables: Option<PathBuf>,

    /// Path to a .tfvars file with sensitive variables to set in the workspace
    #[arg(short, long)]
    pub sensitive: Option<PathBuf>,

    /// Message attached to the queued run
    #[arg(long)]
    pub message: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Suppress progress spinners
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
