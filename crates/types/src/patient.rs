//! Patient profile: age, gender and free-text medical history.

use crate::{FormError, FormResult};
use std::str::FromStr;

/// Youngest accepted patient age in years.
pub const MIN_AGE: u32 = 1;

/// Oldest accepted patient age in years.
pub const MAX_AGE: u32 = 120;

/// Patient age in whole years, guaranteed to lie in `MIN_AGE..=MAX_AGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Age(u32);

impl Age {
    pub fn new(years: u32) -> FormResult<Self> {
        if !(MIN_AGE..=MAX_AGE).contains(&years) {
            return Err(FormError::AgeOutOfRange {
                got: years,
                min: MIN_AGE,
                max: MAX_AGE,
            });
        }
        Ok(Self(years))
    }

    pub fn years(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Age {
    type Error = FormError;

    fn try_from(years: u32) -> FormResult<Self> {
        Age::new(years)
    }
}

impl From<Age> for u32 {
    fn from(age: Age) -> Self {
        age.0
    }
}

impl std::fmt::Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender as offered by the intake form.
///
/// Serialized lowercase. Parsing is case-insensitive and ignores surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = FormError;

    fn from_str(s: &str) -> FormResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(FormError::UnknownGender(s.trim().to_owned())),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = FormError;

    fn try_from(value: String) -> FormResult<Self> {
        value.parse()
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who the symptoms belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientProfile {
    pub age: Age,
    pub gender: Gender,
    /// Existing conditions, allergies or medications. May be empty.
    pub medical_history: String,
}

impl PatientProfile {
    pub fn new(age: Age, gender: Gender, medical_history: impl Into<String>) -> Self {
        Self {
            age,
            gender,
            medical_history: medical_history.into(),
        }
    }
}
