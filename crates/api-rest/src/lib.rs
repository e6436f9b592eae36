//! # API REST
//!
//! Reference implementation of the diagnosis service contract.
//!
//! Handles:
//! - `POST /diagnose` answered by the rule engine in [`rules`]
//! - `GET /health` and `GET /` service metadata
//! - OpenAPI document at `/api-docs/openapi.json`, browsable at `/swagger-ui`
//! - CORS for a browser front-end
//!
//! The router is built here; binding and serving is left to the caller (`diag-run`, tests).

#![warn(rust_2018_idioms)]

pub mod rules;
pub mod schema;

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use diag_types::{DiagnosisRequest, DiagnosisResult, Medicine, ServiceHealth};
pub use rules::RuleEngine;
use schema::{DiagnoseReq, RootRes};

/// Service name reported by `GET /`.
pub const SERVICE_NAME: &str = "Medical Diagnosis API";

/// Service version reported by `GET /`.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Origin allowed by default: a front-end dev server on port 3000.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Which browser origins may call the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin, any method, any header.
    Permissive,
    /// A single origin, any method, any header.
    Origin(HeaderValue),
}

impl CorsPolicy {
    fn layer(&self) -> CorsLayer {
        match self {
            Self::Permissive => CorsLayer::permissive(),
            Self::Origin(origin) => CorsLayer::new()
                .allow_origin(origin.clone())
                .allow_methods(Any)
                .allow_headers(Any),
        }
    }
}

/// Parse a CORS policy from an optional string value.
///
/// `None` or blank selects [`DEFAULT_ALLOWED_ORIGIN`]; `*` selects [`CorsPolicy::Permissive`].
pub fn cors_policy_from_env_value(value: Option<String>) -> anyhow::Result<CorsPolicy> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.into());

    if value == "*" {
        return Ok(CorsPolicy::Permissive);
    }

    let origin = HeaderValue::from_str(&value)
        .map_err(|e| anyhow::anyhow!("invalid CORS origin '{value}': {e}"))?;
    Ok(CorsPolicy::Origin(origin))
}

/// Application state shared across REST API handlers
#[derive(Clone, Default)]
pub struct AppState {
    engine: RuleEngine,
}

#[derive(OpenApi)]
#[openapi(
    paths(root, health, diagnose),
    components(schemas(DiagnoseReq, DiagnosisResult, Medicine, ServiceHealth, RootRes))
)]
pub struct ApiDoc;

/// Build the service router.
pub fn router(cors: CorsPolicy) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/diagnose", post(diagnose))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors.layer())
        .with_state(AppState::default())
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service name and version", body = RootRes)
    )
)]
async fn root() -> Json<RootRes> {
    Json(RootRes {
        message: SERVICE_NAME.into(),
        version: SERVICE_VERSION.into(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = ServiceHealth)
    )
)]
/// Health check endpoint
///
/// The rule engine has no model to load, so `model_loaded` is always `false`.
async fn health(State(state): State<AppState>) -> Json<ServiceHealth> {
    Json(ServiceHealth {
        status: "healthy".into(),
        model_loaded: false,
        engine: state.engine.name().into(),
    })
}

#[utoipa::path(
    post,
    path = "/diagnose",
    request_body = DiagnoseReq,
    responses(
        (status = 200, description = "Diagnosis", body = DiagnosisResult),
        (status = 400, description = "Request values failed validation"),
        (status = 422, description = "Request body is not a diagnosis request")
    )
)]
/// Diagnose a symptom/profile payload
///
/// # Returns
/// * `Ok(Json<DiagnosisResult>)` - Rule-based diagnosis
/// * `Err((StatusCode, String))` - Bad request when symptoms, age or gender are invalid
async fn diagnose(
    State(state): State<AppState>,
    Json(req): Json<DiagnoseReq>,
) -> Result<Json<DiagnosisResult>, (StatusCode, String)> {
    let request = DiagnosisRequest::try_from(req).map_err(|e| {
        tracing::warn!("Rejected diagnosis request: {}", e);
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    tracing::info!(
        symptoms = request.symptoms().len(),
        age = %request.profile().age,
        gender = %request.profile().gender,
        "diagnosis requested"
    );

    let result = state.engine.diagnose(&request);
    tracing::info!(disease = %result.disease, severity = %result.severity, "diagnosis answered");

    Ok(Json(result))
}
