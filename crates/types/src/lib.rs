//! # Diag Types
//!
//! Domain data model shared by the diagnosis client, the reference diagnosis service and the CLI.
//!
//! Contains:
//! - Validated input types (`Symptom`, `SymptomSet`, `Age`, `Gender`, `PatientProfile`)
//! - The request sent to a diagnosis service (`DiagnosisRequest`)
//! - The result returned by it (`DiagnosisResult`, `Medicine`, `Severity`)
//! - Presentation classifications that carry no styling (`Tone`, `ConfidenceBand`)
//!
//! The serde representations of these types are the JSON wire contract of `POST /diagnose`.

pub mod diagnosis;
pub mod error;
pub mod health;
pub mod patient;
pub mod request;
pub mod symptoms;

pub use diagnosis::{ConfidenceBand, DiagnosisResult, Medicine, Severity, Tone};
pub use error::{FormError, FormResult};
pub use health::ServiceHealth;
pub use patient::{Age, Gender, PatientProfile, MAX_AGE, MIN_AGE};
pub use request::DiagnosisRequest;
pub use symptoms::{Symptom, SymptomSet};
