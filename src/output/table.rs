//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::Formatter;
use crate::deploy::DeployOutcome;

/// Formatter for two-column table output
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format(&self, outcome: &DeployOutcome) -> String {
        let mut table = Table::new();
        table.load_preset(NOTHING);

        let variables = outcome.variables.to_string();
        let rows = [
            ("Workspace ID", outcome.workspace.as_str()),
            ("Workspace Name", outcome.workspace_name.as_str()),
            ("Run ID", outcome.run_id.as_str()),
            ("Variables", variables.as_str()),
            ("URL", outcome.url.as_str()),
        ];
        for (label, value) in rows {
            table.add_row(vec![label, value]);
        }

        table.to_string()
    }
}
