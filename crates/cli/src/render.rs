//! Terminal rendering of forms and diagnoses.
//!
//! Every function returns a `String` so the caller decides where it goes. Colours come from
//! `colored` and can be disabled globally (`NO_COLOR`, or `colored::control::set_override`).

use colored::{Color, Colorize};
use diag_core::{ConfidenceBand, DiagnosisResult, ServiceHealth, SymptomForm, Tone};

/// Cells in the confidence bar.
pub const BAR_WIDTH: usize = 20;

pub const DISCLAIMER: &str = "This AI diagnosis tool is for informational purposes only and should \
not replace professional medical advice, diagnosis, or treatment. Always consult with qualified \
healthcare professionals for any medical concerns. In case of emergency, contact your local \
emergency services immediately.";

const EMERGENCY_NOTICE: &str = "This condition requires immediate medical attention. Please \
contact emergency services or visit the nearest hospital immediately.";

const CONSULTATION_NOTICE: &str = "While this AI diagnosis provides helpful insights, please \
consult with a qualified healthcare professional for proper medical evaluation and treatment \
confirmation.";

/// Terminal colour for a tone. Orange has no ANSI name, so it is true colour.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => Color::Green,
        Tone::Caution => Color::Yellow,
        Tone::Warning => Color::TrueColor {
            r: 234,
            g: 88,
            b: 12,
        },
        Tone::Danger => Color::Red,
        Tone::Neutral => Color::BrightBlack,
    }
}

/// `percent` as a bar of `BAR_WIDTH` cells, rounded to the nearest cell.
pub fn confidence_bar(percent: u8) -> String {
    let percent = usize::from(percent.min(100));
    let filled = (percent * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub fn render_result(result: &DiagnosisResult) -> String {
    let percent = result.confidence_percent();
    let band: ConfidenceBand = result.confidence_band();
    let band_color = tone_color(band.tone());

    let mut lines = vec![
        "Diagnosis Results".bold().to_string(),
        String::new(),
        result.disease.bold().to_string(),
        format!(
            "{}  {}",
            format!(" {} Risk ", result.severity.label()).color(tone_color(result.severity.tone())),
            format!("{percent}% Confidence").color(band_color)
        ),
        result.description.clone(),
        format!(
            "Confidence Level [{}] {percent}%",
            confidence_bar(percent).color(band_color)
        ),
        String::new(),
        "Prescribed Medicines".bold().to_string(),
    ];

    if result.medicines.is_empty() {
        lines.push("  (none)".into());
    }
    for medicine in &result.medicines {
        lines.push(format!("  {} ({})", medicine.name.bold(), medicine.dosage.cyan()));
        lines.push(format!("    Frequency: {}", medicine.frequency));
        lines.push(format!("    Duration: {}", medicine.duration));
        lines.push(format!("    {} {}", "Instructions:".yellow(), medicine.instructions));
    }

    lines.push(String::new());
    lines.push("General Recommendations".bold().to_string());
    lines.extend(
        result
            .recommendations
            .iter()
            .enumerate()
            .map(|(index, recommendation)| format!("  {}. {}", index + 1, recommendation)),
    );

    if result.severity.requires_emergency_notice() {
        lines.push(String::new());
        lines.push("!! Emergency Alert !!".red().bold().to_string());
        lines.push(EMERGENCY_NOTICE.red().to_string());
    }

    lines.push(String::new());
    lines.push("Professional Consultation Recommended".blue().bold().to_string());
    lines.push(CONSULTATION_NOTICE.into());

    join_lines(lines)
}

/// Current form state, one field per line.
pub fn render_form(form: &SymptomForm, loading: bool) -> String {
    let symptoms: Vec<&str> = form.symptoms().iter().map(|s| s.as_str()).collect();
    let symptoms = if symptoms.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        symptoms.join(", ")
    };

    let mut lines = vec![
        format!("Symptoms: {symptoms}"),
        format!(
            "Age: {}",
            form.age()
                .map(|a| a.to_string())
                .unwrap_or_else(|| "(not set)".into())
        ),
        format!(
            "Gender: {}",
            form.gender()
                .map(|g| g.to_string())
                .unwrap_or_else(|| "(not set)".into())
        ),
    ];
    if !form.medical_history().is_empty() {
        lines.push(format!("Medical history: {}", form.medical_history()));
    }
    lines.push(format!(
        "Ready to submit: {}",
        if form.can_submit(loading) { "yes" } else { "no" }
    ));

    join_lines(lines)
}

pub fn render_common_symptoms() -> String {
    join_lines(
        diag_core::COMMON_SYMPTOMS
            .iter()
            .enumerate()
            .map(|(index, symptom)| format!("{:>2}. {}", index + 1, symptom)),
    )
}

/// Each line followed by a newline.
fn join_lines(lines: impl IntoIterator<Item = String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

pub fn render_health(health: &ServiceHealth) -> String {
    let status = if health.is_healthy() {
        health.status.green()
    } else {
        health.status.red()
    };
    format!(
        "Status: {}\nModel loaded: {}\nEngine: {}\n",
        status,
        health.model_loaded,
        if health.engine.is_empty() {
            "unknown"
        } else {
            health.engine.as_str()
        }
    )
}
