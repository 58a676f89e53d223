/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Workspace variables sub-endpoint
    pub const VARS: &str = "vars";

    /// Runs endpoint
    pub const RUNS: &str = "runs";

    /// JSON:API content type required by TFE
    pub const CONTENT_TYPE: &str = "application/vnd.api+json";

    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Environment variable names
pub mod env {
    /// API token
    pub const TOKEN: &str = "TFC_TOKEN";

    /// Organization name
    pub const ORG: &str = "TFC_ORG";

    /// Optional override for the API base URL
    pub const URL: &str = "TFC_URL";
}

/// Workspace variable settings
pub mod variables {
    /// Category for every variable created by this tool
    pub const CATEGORY: &str = "terraform";

    /// Description attached to created variables
    pub const DESCRIPTION: &str = "";
}

/// Default values for CLI
pub mod defaults {
    /// Default API base URL (HCP Terraform)
    pub const URL: &str = "https://app.terraform.io/api/v2";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
