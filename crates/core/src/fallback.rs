//! The fixed diagnosis shown when the diagnosis service cannot be used.
//!
//! Every failure kind (unreachable service, non-2xx status, unusable body) yields the same
//! result. The kind is only recorded in the operator log.

use diag_types::{DiagnosisResult, Medicine, Severity};

use crate::CoreResult;

pub const FALLBACK_DISEASE: &str = "API Connection Error - Mock Diagnosis";

pub const FALLBACK_CONFIDENCE: f64 = 75.0;

pub const FALLBACK_DESCRIPTION: &str = "Unable to connect to the AI diagnosis server. \
This is a fallback diagnosis. Please ensure the backend server is running.";

pub const FALLBACK_RECOMMENDATIONS: [&str; 4] = [
    "Please start the backend server by running the start_server.bat file",
    "Ensure Python and required dependencies are installed",
    "Check that port 8000 is not blocked by firewall",
    "Consult a healthcare professional for proper medical advice",
];

/// Build the fallback diagnosis.
pub fn fallback_result() -> DiagnosisResult {
    DiagnosisResult {
        disease: FALLBACK_DISEASE.into(),
        confidence: FALLBACK_CONFIDENCE,
        description: FALLBACK_DESCRIPTION.into(),
        severity: Severity::Medium,
        medicines: vec![Medicine {
            name: "Paracetamol".into(),
            dosage: "500mg".into(),
            frequency: "Every 6-8 hours".into(),
            duration: "3-5 days".into(),
            instructions: "Take with food to avoid stomach irritation".into(),
        }],
        recommendations: FALLBACK_RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
    }
}

/// Turn a service outcome into something displayable.
///
/// Successful results pass through untouched. Errors are logged and replaced by
/// [`fallback_result`].
pub fn resolve(outcome: CoreResult<DiagnosisResult>) -> DiagnosisResult {
    match outcome {
        Ok(result) => {
            tracing::info!(
                disease = %result.disease,
                severity = %result.severity,
                "diagnosis received"
            );
            result
        }
        Err(e) => {
            tracing::error!(kind = %e.kind(), error = %e, "Error calling diagnosis API, using fallback diagnosis");
            fallback_result()
        }
    }
}
