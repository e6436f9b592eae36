//! Rule-based diagnosis engine.
//!
//! Answers `/diagnose` without a language model: a request mentioning any common-cold symptom
//! gets the common cold diagnosis, everything else is referred for evaluation.

use diag_types::{DiagnosisRequest, DiagnosisResult, Medicine, Severity};

/// Symptoms (lowercase) that select the common cold diagnosis.
pub const COLD_SYMPTOMS: [&str; 4] = ["fever", "headache", "cough", "runny nose"];

/// Stateless rule engine shared by the REST handlers.
#[derive(Debug, Default, Clone)]
pub struct RuleEngine;

impl RuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Name reported by the health endpoint.
    pub fn name(&self) -> &'static str {
        "rules"
    }

    pub fn diagnose(&self, request: &DiagnosisRequest) -> DiagnosisResult {
        let cold_like = request
            .symptoms()
            .iter()
            .any(|s| COLD_SYMPTOMS.contains(&s.as_str().to_lowercase().as_str()));

        if cold_like {
            common_cold()
        } else {
            needs_evaluation()
        }
    }
}

fn medicine(
    name: &str,
    dosage: &str,
    frequency: &str,
    duration: &str,
    instructions: &str,
) -> Medicine {
    Medicine {
        name: name.into(),
        dosage: dosage.into(),
        frequency: frequency.into(),
        duration: duration.into(),
        instructions: instructions.into(),
    }
}

fn common_cold() -> DiagnosisResult {
    DiagnosisResult {
        disease: "Common Cold".into(),
        confidence: 82.0,
        description: "A viral upper respiratory tract infection commonly caused by rhinovirus. \
Symptoms typically resolve within 7-10 days."
            .into(),
        severity: Severity::Low,
        medicines: vec![
            medicine(
                "Paracetamol",
                "500mg",
                "Every 6 hours",
                "3-5 days",
                "Take with food to reduce stomach irritation",
            ),
            medicine(
                "Cetirizine",
                "10mg",
                "Once daily",
                "5-7 days",
                "May cause drowsiness, take before bedtime",
            ),
        ],
        recommendations: [
            "Get plenty of rest and sleep",
            "Drink warm fluids like herbal tea or warm water with honey",
            "Use a humidifier or inhale steam to relieve congestion",
            "Gargle with warm salt water for sore throat",
            "Avoid close contact with others to prevent spreading",
            "If symptoms persist beyond 10 days or worsen, consult a doctor",
        ]
        .map(String::from)
        .to_vec(),
    }
}

fn needs_evaluation() -> DiagnosisResult {
    DiagnosisResult {
        disease: "Symptom Complex Requiring Evaluation".into(),
        confidence: 70.0,
        description: "The combination of symptoms requires professional medical evaluation \
for accurate diagnosis."
            .into(),
        severity: Severity::Medium,
        medicines: vec![medicine(
            "Paracetamol",
            "500mg",
            "As needed for pain/fever",
            "Short-term use only",
            "Do not exceed 4g per day, take with food",
        )],
        recommendations: [
            "Schedule an appointment with a healthcare provider",
            "Keep a symptom diary noting when symptoms occur",
            "Stay hydrated and get adequate rest",
            "Avoid self-medication beyond basic pain relief",
            "Seek immediate medical attention if symptoms worsen rapidly",
        ]
        .map(String::from)
        .to_vec(),
    }
}
