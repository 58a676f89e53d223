//! Workspace naming

use uuid::Uuid;

/// How the new workspace should be named
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceTarget {
    /// Use this exact name
    Name(String),
    /// Generate `<prefix>-<uuid>`
    Prefix(String),
}

impl WorkspaceTarget {
    /// Resolve the final workspace name
    ///
    /// A prefix target yields a fresh name on every call.
    pub fn resolve_name(&self) -> String {
        match self {
            WorkspaceTarget::Name(name) => name.clone(),
            WorkspaceTarget::Prefix(prefix) => format!("{}-{}", prefix, Uuid::new_v4()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_name_is_kept() {
        let target = WorkspaceTarget::Name("my-workspace".to_string());
        assert_eq!(target.resolve_name(), "my-workspace");
    }

    #[test]
    fn test_prefix_generates_uuid_suffix() {
        let target = WorkspaceTarget::Prefix("demo".to_string());
        let name = target.resolve_name();

        let suffix = name.strip_prefix("demo-").expect("missing prefix");
        assert!(Uuid::parse_str(suffix).is_ok());
    }

    #[test]
    fn test_prefix_generates_distinct_names() {
        let target = WorkspaceTarget::Prefix("demo".to_string());
        assert_ne!(target.resolve_name(), target.resolve_name());
    }
}
