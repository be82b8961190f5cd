//! Gateways for submitting a folder selection to the test backend.
//!
//! This module provides a trait-based gateway for the save-folder call. The
//! trait-based design enables mocking in tests while the reqwest
//! implementation handles the real HTTP request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::endpoint::BackendEndpoint;
use super::error::WorkflowError;
use super::models::{ApiAck, SaveFolderRequest, SubmitAck};

/// Gateway that can submit a folder path for a test run.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitFolderGateway: Send + Sync {
    /// Submit the folder path and return the backend's acknowledgment.
    async fn submit_folder(&self, folder_path: &str) -> Result<SubmitAck, WorkflowError>;
}

/// Reqwest-backed gateway posting JSON to the save-folder endpoint.
#[derive(Debug, Clone)]
pub struct HttpSubmitFolderGateway {
    client: Client,
    endpoint: BackendEndpoint,
}

impl HttpSubmitFolderGateway {
    /// Creates a gateway for the given endpoint with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Configuration`] when the HTTP client cannot
    /// be constructed.
    pub fn new(endpoint: BackendEndpoint, timeout: Duration) -> Result<Self, WorkflowError> {
        let client = Client::builder().timeout(timeout).build().map_err(|error| {
            WorkflowError::Configuration {
                message: format!("failed to configure backend HTTP client: {error}"),
            }
        })?;

        Ok(Self { client, endpoint })
    }

    /// Returns the endpoint this gateway posts to.
    #[must_use]
    pub const fn endpoint(&self) -> &BackendEndpoint {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitFolderGateway for HttpSubmitFolderGateway {
    async fn submit_folder(&self, folder_path: &str) -> Result<SubmitAck, WorkflowError> {
        tracing::debug!(folder_path, endpoint = %self.endpoint, "submitting folder");

        let response = self
            .client
            .post(self.endpoint.as_str())
            .json(&SaveFolderRequest { folder_path })
            .send()
            .await
            .map_err(|error| WorkflowError::Network {
                message: format!("save-folder request failed: {error}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(map_backend_error(status, &body));
        }

        let ack: ApiAck = response
            .json()
            .await
            .map_err(|error| WorkflowError::Backend {
                status: status.as_u16(),
                message: format!("acknowledgment decode failed: {error}"),
            })?;

        Ok(ack.into())
    }
}

/// Maps a non-success response to a backend error, preferring the JSON
/// `message` field when the body carries one.
fn map_backend_error(status: StatusCode, body: &str) -> WorkflowError {
    let message =
        extract_backend_message(body).unwrap_or_else(|| truncate_for_message(body, 160));

    WorkflowError::Backend {
        status: status.as_u16(),
        message,
    }
}

fn extract_backend_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::endpoint::BackendEndpoint;
    use super::{HttpSubmitFolderGateway, SubmitFolderGateway, WorkflowError};

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn gateway_for(server_uri: &str) -> HttpSubmitFolderGateway {
        let endpoint = BackendEndpoint::parse(&format!("{server_uri}/save-folder"))
            .expect("mock server URL should parse");
        HttpSubmitFolderGateway::new(endpoint, TIMEOUT).expect("should create gateway")
    }

    #[tokio::test]
    async fn submit_folder_posts_json_body_and_returns_ack() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/save-folder"))
            .and(body_json(json!({ "folderPath": "demo-project" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Folder path 'demo-project' saved successfully!"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server.uri());
        let ack = gateway
            .submit_folder("demo-project")
            .await
            .expect("request should succeed");

        assert_eq!(
            ack.message.as_deref(),
            Some("Folder path 'demo-project' saved successfully!")
        );
    }

    #[tokio::test]
    async fn submit_folder_tolerates_ack_without_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/save-folder"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server.uri());
        let ack = gateway
            .submit_folder("demo-project")
            .await
            .expect("request should succeed");

        assert_eq!(ack.message, None);
    }

    #[tokio::test]
    async fn submit_folder_maps_error_status_with_json_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/save-folder"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "message": "analyzer crashed"
            })))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server.uri());
        let error = gateway
            .submit_folder("demo-project")
            .await
            .expect_err("request should fail");

        match error {
            WorkflowError::Backend { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "analyzer crashed");
            }
            other => panic!("expected Backend error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn submit_folder_truncates_non_json_error_bodies() {
        let server = MockServer::start().await;

        let long_body = "x".repeat(400);
        Mock::given(method("POST"))
            .and(path("/save-folder"))
            .respond_with(ResponseTemplate::new(502).set_body_string(long_body))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server.uri());
        let error = gateway
            .submit_folder("demo-project")
            .await
            .expect_err("request should fail");

        match error {
            WorkflowError::Backend { status, message } => {
                assert_eq!(status, 502);
                assert!(message.ends_with("..."), "expected truncation: {message}");
            }
            other => panic!("expected Backend error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn submit_folder_rejects_non_json_success_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/save-folder"))
            .respond_with(ResponseTemplate::new(200).set_body_string("saved"))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server.uri());
        let error = gateway
            .submit_folder("demo-project")
            .await
            .expect_err("non-JSON acknowledgment should fail");

        assert!(
            matches!(error, WorkflowError::Backend { status: 200, .. }),
            "expected Backend decode error, got {error:?}"
        );
    }

    #[tokio::test]
    async fn submit_folder_maps_connection_failures_to_network_errors() {
        // Port 1 is privileged and unbound in the test environment, so the
        // connection is refused before any HTTP exchange.
        let endpoint =
            BackendEndpoint::parse("http://127.0.0.1:1/save-folder").expect("URL should parse");
        let gateway =
            HttpSubmitFolderGateway::new(endpoint, TIMEOUT).expect("should create gateway");

        let error = gateway
            .submit_folder("demo-project")
            .await
            .expect_err("connection should be refused");

        assert!(
            matches!(error, WorkflowError::Network { .. }),
            "expected Network error, got {error:?}"
        );
    }
}
