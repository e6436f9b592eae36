//! REST request/response bodies that are not domain types.

use diag_types::{Age, DiagnosisRequest, FormError, PatientProfile, SymptomSet};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /diagnose` as it arrives, before validation.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DiagnoseReq {
    #[schema(example = json!(["Fever", "Cough"]))]
    pub symptoms: Vec<String>,
    #[schema(example = 30)]
    pub age: u32,
    #[schema(example = "male")]
    pub gender: String,
    #[serde(default)]
    pub medical_history: String,
}

impl TryFrom<DiagnoseReq> for DiagnosisRequest {
    type Error = FormError;

    fn try_from(req: DiagnoseReq) -> Result<Self, FormError> {
        let symptoms = SymptomSet::try_from(req.symptoms)?;
        let profile = PatientProfile::new(
            Age::new(req.age)?,
            req.gender.parse()?,
            req.medical_history,
        );
        DiagnosisRequest::new(symptoms, profile)
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RootRes {
    pub message: String,
    pub version: String,
}
