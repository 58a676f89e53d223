use std::fmt;

/// Custom error type for deployment operations
#[derive(Debug)]
pub enum TfeError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Missing or invalid configuration (credentials, flags, URL)
    Config(String),
    /// Variable file could not be read or parsed
    VarFile { path: String, message: String },
    /// JSON parsing error
    Json(String),
}

impl fmt::Display for TfeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfeError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TfeError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            TfeError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TfeError::VarFile { path, message } => {
                write!(f, "Variable file '{}': {}", path, message)
            }
            TfeError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for TfeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfeError {
    fn from(err: reqwest::Error) -> Self {
        TfeError::Http(err)
    }
}

impl From<serde_json::Error> for TfeError {
    fn from(err: serde_json::Error) -> Self {
        TfeError::Json(err.to_string())
    }
}

/// Result type alias for deployment operations
pub type Result<T> = std::result::Result<T, TfeError>;
