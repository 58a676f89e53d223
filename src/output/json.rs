//! JSON output formatter

use super::Formatter;
use crate::deploy::DeployOutcome;

/// Formatter for JSON output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, outcome: &DeployOutcome) -> String {
        match serde_json::to_string_pretty(outcome) {
            Ok(json) => json,
            Err(e) => format!("{{\"error\": \"Error serializing to JSON: {}\"}}", e),
        }
    }
}
