//! Diagnosis service seam and its HTTP implementation.
//!
//! A [`DiagnosisService`] makes exactly one attempt per call and classifies failures into
//! [`CoreError`] variants. It never falls back on its own; turning a failure into a displayable
//! result is the workflow's job.

use std::future::Future;

use diag_types::{DiagnosisRequest, DiagnosisResult, ServiceHealth};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, CoreError, CoreResult};

/// Something that maps a diagnosis request to a diagnosis result.
pub trait DiagnosisService {
    /// Issue one diagnosis request.
    ///
    /// # Errors
    ///
    /// - `CoreError::Transport` if the service could not be reached or the body not read
    /// - `CoreError::HttpStatus` if the service answered with a non-2xx status
    /// - `CoreError::Decode` if the body is not a `DiagnosisResult`
    fn diagnose(
        &self,
        request: &DiagnosisRequest,
    ) -> impl Future<Output = CoreResult<DiagnosisResult>> + Send;
}

/// `reqwest`-backed client for a diagnosis service speaking JSON over HTTP.
///
/// No retry, no timeout: each call runs until the request settles.
#[derive(Clone, Debug)]
pub struct HttpDiagnosisClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpDiagnosisClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Query the service's `GET /health` endpoint.
    pub async fn check_health(&self) -> CoreResult<ServiceHealth> {
        let url = self.config.health_url()?;
        tracing::debug!(%url, "checking diagnosis service health");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(CoreError::Transport)?;

        decode_json(response).await
    }
}

impl DiagnosisService for HttpDiagnosisClient {
    async fn diagnose(&self, request: &DiagnosisRequest) -> CoreResult<DiagnosisResult> {
        tracing::debug!(
            endpoint = %self.config.endpoint(),
            symptoms = request.symptoms().len(),
            "sending diagnosis request"
        );

        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .http
            .post(self.config.endpoint().clone())
            .json(request)
            .send()
            .await
            .map_err(CoreError::Transport)?;

        decode_json(response).await
    }
}

async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> CoreResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(CoreError::HttpStatus {
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(CoreError::Transport)?;
    serde_json::from_slice(&body).map_err(CoreError::Decode)
}
