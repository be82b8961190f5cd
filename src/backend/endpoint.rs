//! URL wrapper for the save-folder backend endpoint.

use url::Url;

use super::error::WorkflowError;

/// Address the demo backend listens on when nothing else is configured.
pub const DEFAULT_SAVE_FOLDER_ENDPOINT: &str = "http://127.0.0.1:8000/save-folder";

/// Validated backend endpoint to avoid stringly typed request targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendEndpoint(Url);

impl BackendEndpoint {
    /// Parses an endpoint URL, requiring an http(s) scheme and a host.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::InvalidEndpoint`] when the input is not a
    /// URL, uses a non-HTTP scheme, or lacks a host.
    pub fn parse(input: &str) -> Result<Self, WorkflowError> {
        let parsed =
            Url::parse(input).map_err(|error| WorkflowError::InvalidEndpoint(error.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(WorkflowError::InvalidEndpoint(format!(
                "unsupported scheme `{}`",
                parsed.scheme()
            )));
        }

        if parsed.host_str().is_none() {
            return Err(WorkflowError::InvalidEndpoint(
                "URL must include a host".to_owned(),
            ));
        }

        Ok(Self(parsed))
    }

    /// Returns the endpoint for the default local demo backend.
    ///
    /// # Panics
    ///
    /// Never panics; the default address is a compile-time constant that
    /// always parses.
    #[must_use]
    pub fn default_local() -> Self {
        let parsed = Self::parse(DEFAULT_SAVE_FOLDER_ENDPOINT);
        #[expect(clippy::expect_used, reason = "the default endpoint constant is well-formed")]
        let endpoint = parsed.expect("default endpoint must parse");
        endpoint
    }

    /// Borrow the endpoint as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Borrow the underlying URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }
}

impl std::fmt::Display for BackendEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
