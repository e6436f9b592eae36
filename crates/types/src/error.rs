/// Errors raised while building validated form inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The symptom text was empty or contained only whitespace
    #[error("symptom cannot be empty")]
    EmptySymptom,
    /// A request was built without any symptoms
    #[error("at least one symptom is required")]
    NoSymptoms,
    #[error("age must be between {min} and {max}, got {got}")]
    AgeOutOfRange { got: u32, min: u32, max: u32 },
    #[error("unknown gender '{0}' (expected male, female or other)")]
    UnknownGender(String),
    #[error("age is required")]
    MissingAge,
    #[error("gender is required")]
    MissingGender,
}

pub type FormResult<T> = std::result::Result<T, FormError>;
