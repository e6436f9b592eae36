//! The payload sent to a diagnosis service.

use crate::{Age, FormError, FormResult, Gender, PatientProfile, SymptomSet};

/// A complete, valid diagnosis request.
///
/// A `DiagnosisRequest` always has at least one symptom, an age and a gender; the medical
/// history may be empty. On the wire the profile is flattened:
///
/// ```json
/// { "symptoms": ["Fever"], "age": 30, "gender": "male", "medical_history": "" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "WireRequest", into = "WireRequest")]
pub struct DiagnosisRequest {
    symptoms: SymptomSet,
    profile: PatientProfile,
}

impl DiagnosisRequest {
    /// Builds a request, rejecting an empty symptom set.
    pub fn new(symptoms: SymptomSet, profile: PatientProfile) -> FormResult<Self> {
        if symptoms.is_empty() {
            return Err(FormError::NoSymptoms);
        }
        Ok(Self { symptoms, profile })
    }

    pub fn symptoms(&self) -> &SymptomSet {
        &self.symptoms
    }

    pub fn profile(&self) -> &PatientProfile {
        &self.profile
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct WireRequest {
    symptoms: SymptomSet,
    age: Age,
    gender: Gender,
    #[serde(default)]
    medical_history: String,
}

impl TryFrom<WireRequest> for DiagnosisRequest {
    type Error = FormError;

    fn try_from(wire: WireRequest) -> FormResult<Self> {
        DiagnosisRequest::new(
            wire.symptoms,
            PatientProfile::new(wire.age, wire.gender, wire.medical_history),
        )
    }
}

impl From<DiagnosisRequest> for WireRequest {
    fn from(request: DiagnosisRequest) -> Self {
        Self {
            symptoms: request.symptoms,
            age: request.profile.age,
            gender: request.profile.gender,
            medical_history: request.profile.medical_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symptom;

    fn sample() -> DiagnosisRequest {
        let mut symptoms = SymptomSet::new();
        symptoms.insert(Symptom::new("Fever").expect("symptom"));
        symptoms.insert(Symptom::new("Cough").expect("symptom"));
        let profile = PatientProfile::new(Age::new(30).expect("age"), Gender::Male, "");
        DiagnosisRequest::new(symptoms, profile).expect("valid request")
    }

    #[test]
    fn empty_symptoms_are_rejected() {
        let profile = PatientProfile::new(Age::new(30).expect("age"), Gender::Male, "");
        let err = DiagnosisRequest::new(SymptomSet::new(), profile).expect_err("no symptoms");
        assert_eq!(err, FormError::NoSymptoms);
    }

    #[test]
    fn serializes_flat_snake_case_payload() {
        let value = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "symptoms": ["Fever", "Cough"],
                "age": 30,
                "gender": "male",
                "medical_history": ""
            })
        );
    }

    #[test]
    fn medical_history_is_optional_on_the_wire() {
        let request: DiagnosisRequest =
            serde_json::from_str(r#"{"symptoms":["Fever","Cough"],"age":30,"gender":"male"}"#)
                .expect("parse request");
        assert_eq!(request, sample());
    }

    #[test]
    fn wire_rejects_empty_symptom_list() {
        let err = serde_json::from_str::<DiagnosisRequest>(
            r#"{"symptoms":[],"age":30,"gender":"male","medical_history":""}"#,
        )
        .expect_err("empty symptoms");
        assert!(err.to_string().contains("at least one symptom"));
    }
}
