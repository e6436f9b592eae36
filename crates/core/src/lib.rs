//! # Diag Core
//!
//! Client-side diagnosis workflow.
//!
//! This crate contains everything between the intake form and the renderer:
//! - Form state and submission gating (`form`)
//! - The diagnosis service seam and its HTTP implementation (`client`)
//! - The fixed fallback diagnosis used whenever the service cannot be used (`fallback`)
//! - The Collecting/Displaying state machine with its loading flag (`workflow`)
//!
//! **No presentation concerns**: colours, layout and terminal I/O belong in `diag-cli`.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod fallback;
pub mod form;
pub mod workflow;

pub use client::{DiagnosisService, HttpDiagnosisClient};
pub use config::{endpoint_from_env_value, ClientConfig};
pub use constants::{COMMON_SYMPTOMS, DEFAULT_DIAGNOSIS_ENDPOINT};
pub use error::{CoreError, CoreResult, FailureKind};
pub use fallback::fallback_result;
pub use form::SymptomForm;
pub use workflow::{DiagnosisWorkflow, Phase};

pub use diag_types::{
    Age, ConfidenceBand, DiagnosisRequest, DiagnosisResult, FormError, Gender, Medicine,
    PatientProfile, ServiceHealth, Severity, Symptom, SymptomSet, Tone,
};
