//! Output formatting module
//!
//! Renders the deployment result as a table or JSON

mod json;
mod table;

use crate::cli::OutputFormat;
use crate::deploy::DeployOutcome;

pub use self::json::JsonFormatter;
pub use self::table::TableFormatter;

/// Trait for output formatters
pub trait Formatter {
    /// Render the deployment result
    fn format(&self, outcome: &DeployOutcome) -> String;
}

/// Render the deployment result in the requested format
pub fn render_outcome(outcome: &DeployOutcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => TableFormatter.format(outcome),
        OutputFormat::Json => JsonFormatter.format(outcome),
    }
}

/// Print the deployment result to stdout
pub fn output_outcome(outcome: &DeployOutcome, format: OutputFormat) {
    println!("{}", render_outcome(outcome, format));
}

#[cfg(test)]
pub(crate) fn sample_outcome() -> DeployOutcome {
    DeployOutcome {
        workspace: "ws-abc123".to_string(),
        workspace_name: "demo-0b7a5f4e".to_string(),
        run_id: "run-xyz789".to_string(),
        url: "https://app.terraform.io/api/v2/app/my-org/workspaces/ws-abc123/runs/run-xyz789"
            .to_string(),
        variables: 3,
    }
}
