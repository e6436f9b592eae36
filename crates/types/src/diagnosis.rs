//! Diagnosis result types.
//!
//! Represents what a diagnosis service answers with, plus the display classifications a
//! renderer needs (tone for the severity badge, band for the confidence bar).

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A prescribed medicine. All fields are opaque display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Medicine {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: String,
}

/// Severity reported by the diagnosis service.
///
/// The four known levels match exactly (case-sensitive). Anything else is kept verbatim in
/// `Other` so that a result is never rejected because of its severity: numbers and booleans
/// keep their JSON text, while `null`, arrays and objects become an empty `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
            Self::Other(raw) => raw,
        }
    }

    /// Badge label. An empty `Other` reads as "Unknown".
    pub fn label(&self) -> &str {
        match self.as_str() {
            "" => "Unknown",
            label => label,
        }
    }

    /// Display tone for the severity badge.
    #[must_use]
    pub fn tone(&self) -> Tone {
        match self {
            Self::Low => Tone::Positive,
            Self::Medium => Tone::Caution,
            Self::High => Tone::Warning,
            Self::Critical => Tone::Danger,
            Self::Other(_) => Tone::Neutral,
        }
    }

    /// Only critical results get the emergency banner.
    #[must_use]
    pub fn requires_emergency_notice(&self) -> bool {
        matches!(self, Self::Critical)
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            "Critical" => Self::Critical,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        Severity::from(value.to_owned())
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

struct SeverityVisitor;

impl<'de> Visitor<'de> for SeverityVisitor {
    type Value = Severity;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a severity level")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Severity, E> {
        Ok(Severity::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Severity, E> {
        Ok(Severity::from(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Severity, E> {
        Ok(Severity::Other(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Severity, E> {
        Ok(Severity::Other(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Severity, E> {
        Ok(Severity::Other(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Severity, E> {
        Ok(Severity::Other(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Severity, E> {
        Ok(Severity::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Severity, E> {
        Ok(Severity::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Severity, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Severity, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Severity::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Severity, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Severity::default())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SeverityVisitor)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Styling-free colour role. Renderers map each tone to their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Caution,
    Warning,
    Danger,
    Neutral,
}

/// Confidence bucket used to colour the confidence figure and bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    /// 80% and above
    High,
    /// 60% up to 80%
    Moderate,
    /// below 60%
    Low,
}

impl ConfidenceBand {
    #[must_use]
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 80.0 {
            Self::High
        } else if confidence >= 60.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::High => Tone::Positive,
            Self::Moderate => Tone::Caution,
            Self::Low => Tone::Danger,
        }
    }
}

/// A diagnosis as returned by the service.
///
/// No range checks are applied on receipt. `confidence` is whatever number the service sent;
/// use [`DiagnosisResult::confidence_percent`] when displaying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DiagnosisResult {
    pub disease: String,
    pub confidence: f64,
    pub description: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub medicines: Vec<Medicine>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl DiagnosisResult {
    /// Confidence as a whole percentage, clamped to 0..=100.
    #[must_use]
    pub fn confidence_percent(&self) -> u8 {
        if self.confidence.is_nan() {
            return 0;
        }
        self.confidence.round().clamp(0.0, 100.0) as u8
    }

    #[must_use]
    pub fn confidence_band(&self) -> ConfidenceBand {
        ConfidenceBand::from_confidence(self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_severities_round_trip_exactly() {
        for (raw, expected) in [
            ("Low", Severity::Low),
            ("Medium", Severity::Medium),
            ("High", Severity::High),
            ("Critical", Severity::Critical),
        ] {
            assert_eq!(Severity::from(raw), expected);
            assert_eq!(String::from(expected), raw);
        }
    }

    #[test]
    fn unknown_severity_is_preserved_and_neutral() {
        let severity: Severity = serde_json::from_str(r#""Severe""#).expect("parse severity");
        assert_eq!(severity, Severity::Other("Severe".into()));
        assert_eq!(severity.tone(), Tone::Neutral);
        assert!(!severity.requires_emergency_notice());
        assert_eq!(
            serde_json::to_string(&severity).expect("serialize"),
            r#""Severe""#
        );

        // Matching is case-sensitive.
        assert_eq!(Severity::from("low").tone(), Tone::Neutral);
    }

    #[test]
    fn non_string_severity_does_not_reject_result() {
        let body = |severity: &str| {
            format!(
                r#"{{"disease":"Influenza","confidence":64,"description":"Seasonal flu."{severity}}}"#
            )
        };

        for (severity, expected) in [
            (r#","severity":null"#, Severity::default()),
            (r#","severity":3"#, Severity::Other("3".into())),
            (r#","severity":2.5"#, Severity::Other("2.5".into())),
            (r#","severity":true"#, Severity::Other("true".into())),
            (r#","severity":{"level":"High"}"#, Severity::default()),
            ("", Severity::default()),
        ] {
            let result: DiagnosisResult =
                serde_json::from_str(&body(severity)).expect("parse result");
            assert_eq!(result.disease, "Influenza", "severity: {severity}");
            assert_eq!(result.severity, expected, "severity: {severity}");
            assert_eq!(result.severity.tone(), Tone::Neutral);
        }
    }

    #[test]
    fn empty_severity_is_labelled_unknown() {
        assert_eq!(Severity::default().label(), "Unknown");
        assert_eq!(Severity::Other("3".into()).label(), "3");
        assert_eq!(Severity::High.label(), "High");
    }

    #[test]
    fn only_critical_requires_emergency_notice() {
        assert!(Severity::Critical.requires_emergency_notice());
        assert!(!Severity::High.requires_emergency_notice());
        assert_eq!(Severity::Critical.tone(), Tone::Danger);
    }

    #[test]
    fn confidence_bands() {
        assert_eq!(ConfidenceBand::from_confidence(80.0), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_confidence(79.9), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_confidence(60.0), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_confidence(59.0), ConfidenceBand::Low);
    }

    #[test]
    fn parses_service_body_with_float_confidence() {
        let body = r#"{
            "disease": "Common Cold",
            "confidence": 82.0,
            "description": "A viral upper respiratory tract infection.",
            "severity": "Low",
            "medicines": [{
                "name": "Paracetamol",
                "dosage": "500mg",
                "frequency": "Every 6 hours",
                "duration": "3-5 days",
                "instructions": "Take with food to reduce stomach irritation"
            }],
            "recommendations": ["Get plenty of rest and sleep"]
        }"#;

        let result: DiagnosisResult = serde_json::from_str(body).expect("parse result");
        assert_eq!(result.disease, "Common Cold");
        assert_eq!(result.confidence_percent(), 82);
        assert_eq!(result.severity, Severity::Low);
        assert_eq!(result.medicines.len(), 1);
        assert_eq!(result.medicines[0].dosage, "500mg");
        assert_eq!(result.confidence_band(), ConfidenceBand::High);
    }

    #[test]
    fn confidence_percent_is_clamped_for_display() {
        let mut result = DiagnosisResult {
            disease: "x".into(),
            confidence: 140.0,
            description: String::new(),
            severity: Severity::Low,
            medicines: vec![],
            recommendations: vec![],
        };
        assert_eq!(result.confidence_percent(), 100);
        result.confidence = -3.0;
        assert_eq!(result.confidence_percent(), 0);
        result.confidence = 74.6;
        assert_eq!(result.confidence_percent(), 75);
    }
}
