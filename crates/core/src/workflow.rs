//! Diagnosis request workflow.
//!
//! Two phases: [`Phase::Collecting`] (no result) and [`Phase::Displaying`] (a result is held).
//! A submission always ends in `Displaying`, with either the service's result or the fallback;
//! only [`DiagnosisWorkflow::reset`] goes back to `Collecting`.
//!
//! The workflow owns its state; renderers read it through accessors and never mutate it.

use diag_types::{DiagnosisRequest, DiagnosisResult};

use crate::client::DiagnosisService;
use crate::fallback;
use crate::form::SymptomForm;
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Collecting,
    Displaying,
}

/// Current result plus loading flag, driven by a [`DiagnosisService`].
#[derive(Debug)]
pub struct DiagnosisWorkflow<S> {
    service: S,
    result: Option<DiagnosisResult>,
    loading: bool,
}

impl<S> DiagnosisWorkflow<S> {
    /// Start in `Collecting`, not loading.
    pub fn new(service: S) -> Self {
        Self {
            service,
            result: None,
            loading: false,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn phase(&self) -> Phase {
        if self.result.is_some() {
            Phase::Displaying
        } else {
            Phase::Collecting
        }
    }

    pub fn result(&self) -> Option<&DiagnosisResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Mark a submission as started.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SubmissionInFlight` if a previous submission has not completed.
    pub fn begin(&mut self) -> CoreResult<()> {
        if self.loading {
            return Err(CoreError::SubmissionInFlight);
        }
        self.loading = true;
        Ok(())
    }

    /// Settle the in-flight submission with the service outcome.
    ///
    /// Failures are logged and replaced by the fallback result. The new result replaces any
    /// previous one wholesale.
    pub fn complete(&mut self, outcome: CoreResult<DiagnosisResult>) -> &DiagnosisResult {
        let result = fallback::resolve(outcome);
        self.loading = false;
        self.result.insert(result)
    }

    /// Drop the current result and return to `Collecting`.
    pub fn reset(&mut self) {
        self.result = None;
    }
}

impl<S: DiagnosisService> DiagnosisWorkflow<S> {
    /// Send `request` to the service and hold the displayable outcome.
    ///
    /// Exactly one service call is made. Service failures never surface here: they become the
    /// fallback result.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SubmissionInFlight` only if `begin` was called without a matching
    /// `complete`.
    pub async fn submit(&mut self, request: DiagnosisRequest) -> CoreResult<&DiagnosisResult> {
        self.begin()?;
        let outcome = self.service.diagnose(&request).await;
        Ok(self.complete(outcome))
    }

    /// Build a request from `form` and submit it, honouring the form's gating rules.
    pub async fn submit_form(&mut self, form: &SymptomForm) -> CoreResult<&DiagnosisResult> {
        if self.loading {
            return Err(CoreError::SubmissionInFlight);
        }
        let request = form.to_request()?;
        self.submit(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::fallback_result;
    use diag_types::{Medicine, Severity};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers every call with a clone of a canned outcome and counts calls.
    struct StubService {
        answer: Option<DiagnosisResult>,
        calls: AtomicUsize,
    }

    impl StubService {
        fn ok(result: DiagnosisResult) -> Self {
            Self {
                answer: Some(result),
                calls: AtomicUsize::new(0),
            }
        }

        fn down() -> Self {
            Self {
                answer: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl DiagnosisService for StubService {
        async fn diagnose(&self, _request: &DiagnosisRequest) -> CoreResult<DiagnosisResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer
                .clone()
                .ok_or(CoreError::HttpStatus { status: 503 })
        }
    }

    fn common_cold() -> DiagnosisResult {
        DiagnosisResult {
            disease: "Common Cold".into(),
            confidence: 82.0,
            description: "A viral upper respiratory tract infection.".into(),
            severity: Severity::Low,
            medicines: vec![Medicine {
                name: "Paracetamol".into(),
                dosage: "500mg".into(),
                frequency: "Every 6 hours".into(),
                duration: "3-5 days".into(),
                instructions: "Take with food to reduce stomach irritation".into(),
            }],
            recommendations: vec!["Get plenty of rest and sleep".into()],
        }
    }

    fn form() -> SymptomForm {
        let mut form = SymptomForm::new();
        form.add_symptom("Fever");
        form.add_symptom("Cough");
        form.set_age(30).expect("age");
        form.set_gender("male").expect("gender");
        form
    }

    #[test]
    fn starts_collecting_and_idle() {
        let workflow = DiagnosisWorkflow::new(StubService::down());
        assert_eq!(workflow.phase(), Phase::Collecting);
        assert!(workflow.result().is_none());
        assert!(!workflow.is_loading());
    }

    #[tokio::test]
    async fn success_is_returned_unchanged() {
        let mut workflow = DiagnosisWorkflow::new(StubService::ok(common_cold()));
        let request = form().to_request().expect("request");

        let result = workflow.submit(request).await.expect("submit").clone();
        assert_eq!(result, common_cold());
        assert_eq!(workflow.phase(), Phase::Displaying);
        assert!(!workflow.is_loading());
        assert_eq!(workflow.service().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failure_yields_fallback() {
        let mut workflow = DiagnosisWorkflow::new(StubService::down());

        let result = workflow.submit_form(&form()).await.expect("submit").clone();
        assert_eq!(result, fallback_result());
        assert_eq!(result.severity, Severity::Medium);
        assert_eq!(workflow.phase(), Phase::Displaying);
        assert!(!workflow.is_loading());
        assert_eq!(workflow.service().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn reset_returns_to_collecting() {
        let mut workflow = DiagnosisWorkflow::new(StubService::ok(common_cold()));
        workflow.submit_form(&form()).await.expect("submit");

        workflow.reset();
        assert_eq!(workflow.phase(), Phase::Collecting);
        assert!(workflow.result().is_none());
    }

    #[tokio::test]
    async fn new_submission_replaces_result_wholesale() {
        let mut workflow = DiagnosisWorkflow::new(StubService::ok(common_cold()));
        workflow.submit_form(&form()).await.expect("submit");

        let _ = workflow.complete(Err(CoreError::HttpStatus { status: 500 }));
        assert_eq!(workflow.result(), Some(&fallback_result()));
    }

    #[test]
    fn begin_rejects_reentry_while_loading() {
        let mut workflow = DiagnosisWorkflow::new(StubService::down());
        workflow.begin().expect("first begin");
        assert!(workflow.is_loading());

        let err = workflow.begin().expect_err("second begin");
        assert!(matches!(err, CoreError::SubmissionInFlight));

        workflow.complete(Ok(common_cold()));
        assert!(!workflow.is_loading());
        workflow.begin().expect("begin after complete");
    }

    #[tokio::test]
    async fn incomplete_form_is_not_submitted() {
        let mut workflow = DiagnosisWorkflow::new(StubService::ok(common_cold()));
        let err = workflow
            .submit_form(&SymptomForm::new())
            .await
            .expect_err("empty form");

        assert!(matches!(err, CoreError::Form(_)));
        assert_eq!(workflow.service().calls.load(Ordering::SeqCst), 0);
        assert_eq!(workflow.phase(), Phase::Collecting);
        assert!(!workflow.is_loading());
    }
}
