//! Client runtime configuration.
//!
//! The diagnosis endpoint is resolved once at process startup and then passed into the client.
//! Nothing in this crate reads environment variables while a request is being handled; binaries
//! read `DIAG_API_URL` (or a `--endpoint` flag) and hand the value to
//! [`endpoint_from_env_value`].

use crate::constants::{DEFAULT_DIAGNOSIS_ENDPOINT, HEALTH_PATH};
use crate::{CoreError, CoreResult};
use reqwest::Url;

/// Client configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    endpoint: Url,
}

impl ClientConfig {
    /// Create a new `ClientConfig` for the given diagnosis endpoint.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` if `endpoint` is not an absolute `http`/`https` URL
    /// with a host.
    pub fn new(endpoint: &str) -> CoreResult<Self> {
        let endpoint = Url::parse(endpoint.trim()).map_err(|e| {
            CoreError::InvalidInput(format!("diagnosis endpoint is not a valid URL: {e}"))
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(CoreError::InvalidInput(format!(
                "diagnosis endpoint must use http or https, got '{}'",
                endpoint.scheme()
            )));
        }

        if endpoint.host_str().is_none() {
            return Err(CoreError::InvalidInput(
                "diagnosis endpoint must include a host".into(),
            ));
        }

        Ok(Self { endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The service health URL: `health` resolved against the diagnosis endpoint.
    ///
    /// `http://localhost:8000/diagnose` becomes `http://localhost:8000/health`. A trailing slash
    /// on the endpoint is ignored, so `.../api/diagnose/` also resolves to `.../api/health`.
    pub fn health_url(&self) -> CoreResult<Url> {
        let mut base = self.endpoint.clone();
        let trimmed = base.path().trim_end_matches('/').to_owned();
        if !trimmed.is_empty() {
            base.set_path(&trimmed);
        }

        base.join(HEALTH_PATH)
            .map_err(|e| CoreError::InvalidInput(format!("cannot derive health URL: {e}")))
    }
}

/// Build a [`ClientConfig`] from an optional string value.
///
/// If `value` is `None` or empty/whitespace, the default endpoint is used.
pub fn endpoint_from_env_value(value: Option<String>) -> CoreResult<ClientConfig> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        Some(endpoint) => ClientConfig::new(&endpoint),
        None => ClientConfig::new(DEFAULT_DIAGNOSIS_ENDPOINT),
    }
}
