//! TFE HTTP client for API interactions

use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TfeError};

/// TFE API client
pub struct TfeClient {
    client: Client,
    token: String,
    base_url: String,
}

impl TfeClient {
    /// Create a new TFE client for a validated API base URL
    ///
    /// `base_url` is expected to be the output of
    /// [`format_base_url`](crate::hcp::format_base_url), e.g.
    /// `https://app.terraform.io/api/v2`.
    pub fn new(token: String, base_url: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url,
        }
    }

    /// Base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", api::CONTENT_TYPE)
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Check a create response, returning its raw body on 201
    ///
    /// Any other status is an error carrying `action` followed by the
    /// server's error payload (JSON:API `errors[].detail` when present, raw
    /// body otherwise).
    pub(crate) async fn expect_created(
        &self,
        response: reqwest::Response,
        action: &str,
    ) -> Result<String> {
        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            debug!("{} failed with status {}: {}", action, status, body);
            return Err(TfeError::Api {
                status: status.as_u16(),
                message: format!("{}: {}", action, describe_error_body(&body)),
            });
        }

        Ok(response.text().await?)
    }

    /// Parse the `data` object of a 201 create response
    pub(crate) async fn parse_created<T>(
        &self,
        response: reqwest::Response,
        action: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.expect_created(response, action).await?;
        let unexpected = |e: serde_json::Error| {
            TfeError::Json(format!("{}: unexpected response: {}", action, e))
        };

        let raw: serde_json::Value = serde_json::from_str(&body).map_err(unexpected)?;
        serde_json::from_value(raw["data"].clone()).map_err(unexpected)
    }
}

/// Extract a readable message from a JSON:API error body
fn describe_error_body(body: &str) -> String {
    let parsed: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return body.trim().to_string(),
    };

    let details: Vec<String> = parsed["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| {
                    e["detail"]
                        .as_str()
                        .or_else(|| e["title"].as_str())
                        .map(str::to_string)
                })
                .collect()
        })
        .unwrap_or_default();

    if details.is_empty() {
        parsed.to_string()
    } else {
        details.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug)]
    struct Created {
        id: String,
    }

    #[test]
    fn test_client_creation() {
        let client = TfeClient::new(
            "my-token".to_string(),
            "https://tfe.example.com/api/v2".to_string(),
        );
        assert_eq!(client.token, "my-token");
        assert_eq!(client.base_url(), "https://tfe.example.com/api/v2");
    }

    #[test]
    fn test_describe_error_body_jsonapi() {
        let body = r#"{"errors":[{"status":"422","title":"invalid attribute","detail":"Name has already been taken"}]}"#;
        assert_eq!(describe_error_body(body), "Name has already been taken");
    }

    #[test]
    fn test_describe_error_body_multiple_details() {
        let body = r#"{"errors":[{"detail":"first"},{"title":"second"}]}"#;
        assert_eq!(describe_error_body(body), "first; second");
    }

    #[test]
    fn test_describe_error_body_plain_text() {
        assert_eq!(describe_error_body("  Forbidden\n"), "Forbidden");
    }

    #[test]
    fn test_describe_error_body_json_without_errors() {
        assert_eq!(
            describe_error_body(r#"{"message":"nope"}"#),
            r#"{"message":"nope"}"#
        );
    }

    #[tokio::test]
    async fn test_post_sends_auth_and_content_type() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::new("secret".to_string(), mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/things"))
            .and(header("Authorization", "Bearer secret"))
            .and(header("Content-Type", "application/vnd.api+json"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"data": {"id": "thing-1"}})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/things", client.base_url());
        let response = client.post(&url).send().await.unwrap();
        let created: Created = client.parse_created(response, "Create thing").await.unwrap();
        assert_eq!(created.id, "thing-1");
    }

    #[tokio::test]
    async fn test_parse_created_rejects_200() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::new("t".to_string(), mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/things"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": {"id": "thing-1"}})),
            )
            .mount(&mock_server)
            .await;

        let url = format!("{}/things", client.base_url());
        let response = client.post(&url).send().await.unwrap();
        let result: Result<Created> = client.parse_created(response, "Create thing").await;

        match result.unwrap_err() {
            TfeError::Api { status, message } => {
                assert_eq!(status, 200);
                assert!(message.starts_with("Create thing"));
            }
            _ => panic!("Expected TfeError::Api"),
        }
    }

    #[tokio::test]
    async fn test_parse_created_missing_data() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::new("t".to_string(), mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/things"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let url = format!("{}/things", client.base_url());
        let response = client.post(&url).send().await.unwrap();
        let result: Result<Created> = client.parse_created(response, "Create thing").await;

        assert!(matches!(result, Err(TfeError::Json(_))));
    }

    #[tokio::test]
    async fn test_expect_created_accepts_empty_body() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::new("t".to_string(), mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/things"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&mock_server)
            .await;

        let url = format!("{}/things", client.base_url());
        let response = client.post(&url).send().await.unwrap();
        let body = client.expect_created(response, "Create thing").await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_parse_created_non_json_body() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::new("t".to_string(), mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/things"))
            .respond_with(ResponseTemplate::new(201).set_body_string("created"))
            .mount(&mock_server)
            .await;

        let url = format!("{}/things", client.base_url());
        let response = client.post(&url).send().await.unwrap();
        let result: Result<Created> = client.parse_created(response, "Create thing").await;

        match result.unwrap_err() {
            TfeError::Json(msg) => assert!(msg.starts_with("Create thing")),
            other => panic!("Expected TfeError::Json, got {:?}", other),
        }
    }
}
