//! Variable file loading
//!
//! Reads `.tfvars` (HCL-style) and `.tfvars.json` files into flat key/value
//! entries. Every entry becomes one workspace variable.

mod parser;

use log::debug;
use std::fs;
use std::path::Path;

use crate::error::{Result, TfeError};

pub use parser::{parse_tfvars, ParseError};

/// A single key/value pair read from a variable file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarEntry {
    pub key: String,
    pub value: String,
}

impl VarEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Load all entries from a variable file
///
/// JSON is used when the file name ends in `.json` or the content starts
/// with `{`; anything else is parsed as HCL-style tfvars.
pub fn load_var_file(path: &Path) -> Result<Vec<VarEntry>> {
    let content = fs::read_to_string(path).map_err(|e| TfeError::VarFile {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        || content.trim_start().starts_with('{');

    let entries = if is_json {
        parse_json_vars(&content)
    } else {
        parse_tfvars(&content).map_err(|e| e.to_string())
    }
    .map_err(|message| TfeError::VarFile {
        path: path.display().to_string(),
        message,
    })?;

    debug!(
        "Loaded {} variable(s) from {}",
        entries.len(),
        path.display()
    );
    Ok(entries)
}

/// Parse a JSON object of variables
///
/// Strings are taken verbatim, `null` becomes empty, other values keep their
/// compact JSON text. Entries come back ordered by key.
pub fn parse_json_vars(content: &str) -> std::result::Result<Vec<VarEntry>, String> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parsed: serde_json::Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let object = parsed
        .as_object()
        .ok_or_else(|| "expected a JSON object of variables".to_string())?;

    let mut entries: Vec<VarEntry> = object
        .iter()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            };
            VarEntry::new(key.as_str(), value)
        })
        .collect();
    entries.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_tfvars_file() {
        let file = temp_file(".tfvars", "region = \"us-east-1\"\ncount = 2\n");
        let entries = load_var_file(file.path()).unwrap();
        assert_eq!(
            entries,
            vec![VarEntry::new("region", "us-east-1"), VarEntry::new("count", "2")]
        );
    }

    #[test]
    fn test_load_json_by_extension() {
        let file = temp_file(".tfvars.json", r#"{"region": "us-east-1"}"#);
        let entries = load_var_file(file.path()).unwrap();
        assert_eq!(entries, vec![VarEntry::new("region", "us-east-1")]);
    }

    #[test]
    fn test_load_json_by_content() {
        let file = temp_file(".tfvars", "\n  {\"region\":\"eu-west-1\"}");
        let entries = load_var_file(file.path()).unwrap();
        assert_eq!(entries, vec![VarEntry::new("region", "eu-west-1")]);
    }

    #[test]
    fn test_json_non_string_values() {
        let entries = parse_json_vars(
            r#"{"count": 3, "enabled": false, "empty": null, "zones": ["a", "b"]}"#,
        )
        .unwrap();
        assert_eq!(
            entries,
            vec![
                VarEntry::new("count", "3"),
                VarEntry::new("empty", ""),
                VarEntry::new("enabled", "false"),
                VarEntry::new("zones", r#"["a","b"]"#),
            ]
        );
    }

    #[test]
    fn test_json_must_be_object() {
        let err = parse_json_vars(r#"["region"]"#).unwrap_err();
        assert!(err.contains("JSON object"));
    }

    #[test]
    fn test_empty_files_have_no_entries() {
        let file = temp_file(".tfvars", "");
        assert!(load_var_file(file.path()).unwrap().is_empty());

        let file = temp_file(".json", "   ");
        assert!(load_var_file(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_var_file(Path::new("/nonexistent/dir/vars.tfvars")).unwrap_err();
        match err {
            TfeError::VarFile { path, .. } => assert!(path.contains("vars.tfvars")),
            _ => panic!("Expected TfeError::VarFile"),
        }
    }

    #[test]
    fn test_malformed_tfvars_names_file_and_line() {
        let file = temp_file(".tfvars", "ok = 1\nbroken\n");
        let err = load_var_file(file.path()).unwrap_err();
        match err {
            TfeError::VarFile { path, message } => {
                assert!(path.ends_with(".tfvars"));
                assert!(message.starts_with("line 2"));
            }
            _ => panic!("Expected TfeError::VarFile"),
        }
    }
}
