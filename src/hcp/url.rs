//! API base URL validation

use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use crate::config::{api, defaults};
use crate::error::{Result, TfeError};

/// `http://` or `https://` scheme followed by the v2 API path
static API_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://.*?/api/v2")
        .expect("API URL regex should compile - this is a static pattern")
});

/// Validate an API base URL and normalize it for path composition
///
/// Only `None` falls back to the HCP Terraform endpoint; an explicit empty
/// string is validated like any other value. The URL must start with
/// `http://` or `https://` and contain `/api/v2`; a trailing slash is removed.
pub fn format_base_url(url: Option<&str>) -> Result<String> {
    let url = url.unwrap_or(defaults::URL);

    if !API_URL_REGEX.is_match(url) {
        return Err(TfeError::Config(format!(
            "Invalid URL '{}': must start with http[s] and end with {}",
            url,
            api::BASE_PATH
        )));
    }

    let formatted = url.trim_end_matches('/').to_string();
    debug!("Using API base URL: {}", formatted);
    Ok(formatted)
}
