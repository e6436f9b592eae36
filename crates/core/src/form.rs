//! Intake form state.
//!
//! `SymptomForm` is what a form collaborator edits: the symptom chips, the age and gender fields
//! and the optional history text. A fresh [`DiagnosisRequest`] is built from it on every
//! submission.

use diag_types::{
    Age, DiagnosisRequest, FormError, Gender, PatientProfile, Symptom, SymptomSet,
};

use crate::CoreResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomForm {
    symptoms: SymptomSet,
    age: Option<Age>,
    gender: Option<Gender>,
    medical_history: String,
}

impl SymptomForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symptom. Blank text and duplicates are ignored.
    ///
    /// Returns `true` if the symptom list changed.
    pub fn add_symptom(&mut self, text: &str) -> bool {
        match Symptom::new(text) {
            Ok(symptom) => self.symptoms.insert(symptom),
            Err(_) => false,
        }
    }

    pub fn remove_symptom(&mut self, text: &str) -> bool {
        self.symptoms.remove(text)
    }

    pub fn symptoms(&self) -> &SymptomSet {
        &self.symptoms
    }

    /// Set the age in years.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Form` if `years` is outside 1..=120; the previous age is kept.
    pub fn set_age(&mut self, years: u32) -> CoreResult<()> {
        self.age = Some(Age::new(years)?);
        Ok(())
    }

    pub fn age(&self) -> Option<Age> {
        self.age
    }

    /// Set the gender from free text (`male`, `female` or `other`, any case).
    pub fn set_gender(&mut self, value: &str) -> CoreResult<()> {
        self.gender = Some(value.parse::<Gender>()?);
        Ok(())
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn set_medical_history(&mut self, text: impl Into<String>) {
        self.medical_history = text.into();
    }

    pub fn medical_history(&self) -> &str {
        &self.medical_history
    }

    /// Whether the submit action should be enabled.
    pub fn can_submit(&self, loading: bool) -> bool {
        !loading && !self.symptoms.is_empty() && self.age.is_some() && self.gender.is_some()
    }

    /// Build a request from the current state.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Form` naming the first missing field.
    pub fn to_request(&self) -> CoreResult<DiagnosisRequest> {
        let age = self.age.ok_or(FormError::MissingAge)?;
        let gender = self.gender.ok_or(FormError::MissingGender)?;
        let profile = PatientProfile::new(age, gender, self.medical_history.clone());
        Ok(DiagnosisRequest::new(self.symptoms.clone(), profile)?)
    }

    /// Empty every field, ready for the next patient.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;

    fn filled() -> SymptomForm {
        let mut form = SymptomForm::new();
        form.add_symptom("Fever");
        form.add_symptom("Cough");
        form.set_age(30).expect("age");
        form.set_gender("male").expect("gender");
        form
    }

    #[test]
    fn add_symptom_trims_and_ignores_duplicates() {
        let mut form = SymptomForm::new();
        assert!(form.add_symptom("  Fever "));
        assert!(!form.add_symptom("Fever"));
        assert!(!form.add_symptom("   "));
        assert_eq!(form.symptoms().len(), 1);
        assert!(form.symptoms().contains("Fever"));
    }

    #[test]
    fn submit_gating_requires_all_fields_and_idle() {
        let mut form = SymptomForm::new();
        assert!(!form.can_submit(false));

        form.add_symptom("Fever");
        assert!(!form.can_submit(false));
        form.set_age(42).expect("age");
        assert!(!form.can_submit(false));
        form.set_gender("Female").expect("gender");
        assert!(form.can_submit(false));
        assert!(!form.can_submit(true));

        form.remove_symptom("Fever");
        assert!(!form.can_submit(false));
    }

    #[test]
    fn invalid_age_keeps_previous_value() {
        let mut form = filled();
        let err = form.set_age(0).expect_err("age 0");
        assert!(matches!(err, CoreError::Form(FormError::AgeOutOfRange { .. })));
        assert_eq!(form.age().map(Age::years), Some(30));
    }

    #[test]
    fn to_request_names_missing_field() {
        let mut form = SymptomForm::new();
        form.add_symptom("Fever");
        match form.to_request().expect_err("no age") {
            CoreError::Form(FormError::MissingAge) => {}
            other => panic!("expected MissingAge, got {other:?}"),
        }

        form.set_age(30).expect("age");
        match form.to_request().expect_err("no gender") {
            CoreError::Form(FormError::MissingGender) => {}
            other => panic!("expected MissingGender, got {other:?}"),
        }

        let mut form = SymptomForm::new();
        form.set_age(30).expect("age");
        form.set_gender("other").expect("gender");
        match form.to_request().expect_err("no symptoms") {
            CoreError::Form(FormError::NoSymptoms) => {}
            other => panic!("expected NoSymptoms, got {other:?}"),
        }
    }

    #[test]
    fn to_request_builds_fresh_request() {
        let mut form = filled();
        form.set_medical_history("Asthma");
        let request = form.to_request().expect("request");

        assert_eq!(request.symptoms().len(), 2);
        assert_eq!(request.profile().age.years(), 30);
        assert_eq!(request.profile().gender, Gender::Male);
        assert_eq!(request.profile().medical_history, "Asthma");

        form.add_symptom("Fatigue");
        assert_eq!(request.symptoms().len(), 2);
    }

    #[test]
    fn clear_empties_the_form() {
        let mut form = filled();
        form.clear();
        assert_eq!(form, SymptomForm::new());
    }
}
