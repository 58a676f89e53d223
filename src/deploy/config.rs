//! Deployment configuration resolved from CLI arguments and environment

use log::debug;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::env;
use crate::error::{Result, TfeError};
use crate::hcp::{format_base_url, WorkspaceTarget};

/// Everything the deployment pipeline needs, validated up front
#[derive(Clone)]
pub struct DeployConfig {
    /// API base URL without trailing slash, e.g. `https://app.terraform.io/api/v2`
    pub base_url: String,
    pub token: String,
    pub org: String,
    pub target: WorkspaceTarget,
    pub module_id: String,
    pub variables: Option<PathBuf>,
    pub sensitive: Option<PathBuf>,
    pub message: Option<String>,
}

impl DeployConfig {
    /// Build the configuration from parsed CLI args and the process environment
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::resolve(
            cli,
            std::env::var(env::TOKEN).ok(),
            std::env::var(env::ORG).ok(),
        )
    }

    /// Build the configuration from parsed CLI args and explicit credentials
    ///
    /// Empty credentials, module, workspace and prefix count as missing; an
    /// explicit empty URL is rejected rather than defaulted.
    pub fn resolve(cli: &Cli, token: Option<String>, org: Option<String>) -> Result<Self> {
        let token = non_empty(token).ok_or_else(|| {
            TfeError::Config(format!("{} environment variable not set", env::TOKEN))
        })?;
        let org = non_empty(org).ok_or_else(|| {
            TfeError::Config(format!("{} environment variable not set", env::ORG))
        })?;

        let module_id = non_empty(Some(cli.module.clone()))
            .ok_or_else(|| TfeError::Config("The '--module' argument is required.".to_string()))?;

        let target = match (
            non_empty(cli.workspace.clone()),
            non_empty(cli.prefix.clone()),
        ) {
            (Some(name), None) => WorkspaceTarget::Name(name),
            (None, Some(prefix)) => WorkspaceTarget::Prefix(prefix),
            (Some(_), Some(_)) => {
                return Err(TfeError::Config(
                    "Only one of the '--workspace' or '--prefix' arguments may be given."
                        .to_string(),
                ))
            }
            (None, None) => {
                return Err(TfeError::Config(
                    "One of the '--workspace' or '--prefix' arguments is required.".to_string(),
                ))
            }
        };

        let base_url = format_base_url(cli.url.as_deref())?;

        debug!(
            "Resolved config: url={}, org={}, target={:?}, module={}",
            base_url, org, target, module_id
        );

        Ok(Self {
            base_url,
            token,
            org,
            target,
            module_id,
            variables: cli.variables.clone(),
            sensitive: cli.sensitive.clone(),
            message: cli.message.clone(),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
