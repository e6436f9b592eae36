//! Constants used throughout the diag core crate.

/// Diagnosis endpoint used when no endpoint is configured.
pub const DEFAULT_DIAGNOSIS_ENDPOINT: &str = "http://localhost:8000/diagnose";

/// Environment variable holding the diagnosis endpoint URL.
pub const DIAGNOSIS_ENDPOINT_ENV: &str = "DIAG_API_URL";

/// Path of the health check, resolved relative to the diagnosis endpoint.
pub const HEALTH_PATH: &str = "health";

/// Quick-pick symptoms offered by the intake form.
pub const COMMON_SYMPTOMS: [&str; 15] = [
    "Fever",
    "Headache",
    "Cough",
    "Sore throat",
    "Runny nose",
    "Fatigue",
    "Nausea",
    "Vomiting",
    "Diarrhea",
    "Abdominal pain",
    "Chest pain",
    "Shortness of breath",
    "Dizziness",
    "Muscle aches",
    "Joint pain",
];
