//! Editorial policy: business rules layered on top of a quality report.
//!
//! None of this is part of the analyzer contract. Thresholds here decide how
//! the HTTP layer labels and routes a manuscript, and what it rejects up front.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use crate::error::{EcdoticaError, Result};
use crate::types::{EditorialStatus, Evaluation, ManuscriptSubmission, QualityReport, Triage};
use crate::MANUSCRIPT_MIN_WORDS;

/// Hex length of a manuscript id
const MANUSCRIPT_ID_LEN: usize = 12;

/// Preliminary verdict for a fresh submission
pub fn triage(report: &QualityReport) -> Triage {
    if report.quality_score >= 75 && report.word_count >= MANUSCRIPT_MIN_WORDS {
        Triage::Promising
    } else if report.quality_score < 50 {
        Triage::NeedsImprovement
    } else {
        Triage::ReviewNeeded
    }
}

/// Route an uploaded manuscript; returns the status and a recommendation
pub fn route(report: &QualityReport) -> (EditorialStatus, &'static str) {
    let score = report.quality_score;
    let words = report.word_count;
    let issues = report.issues.len();

    if score >= 80 && words >= 30_000 && issues <= 2 {
        (
            EditorialStatus::Accepted,
            "High-quality manuscript. Recommended for publication with light editing.",
        )
    } else if score >= 70 && words >= 20_000 && issues <= 4 {
        (
            EditorialStatus::ReviewNeeded,
            "Promising manuscript. Needs a moderate editorial pass to polish some aspects.",
        )
    } else if score >= 60 && words >= 10_000 {
        (
            EditorialStatus::ReviewNeeded,
            "Manuscript with potential. Needs detailed editorial review and possibly substantial changes before publication.",
        )
    } else {
        (
            EditorialStatus::Rejected,
            "Manuscript does not meet minimum quality standards. Substantial rewriting is recommended before resubmission.",
        )
    }
}

/// Recommendations for a detailed analysis, in fixed order
pub fn recommendations(report: &QualityReport) -> Vec<String> {
    let mut out = Vec::new();
    if report.quality_score < 70 {
        out.push("Review sentence and paragraph structure".to_string());
    }
    if report.issues.len() > 5 {
        out.push("Editorial correction needed before publication".to_string());
    }
    if report.word_count < MANUSCRIPT_MIN_WORDS {
        out.push("Consider expanding the content".to_string());
    }
    out
}

pub fn publication_ready(report: &QualityReport) -> bool {
    report.quality_score >= 80 && report.issues.len() <= 3
}

/// Label for the quick evaluation endpoint
pub fn evaluate(score: u8) -> Evaluation {
    match score {
        80..=u8::MAX => Evaluation::Excellent,
        60..=79 => Evaluation::Good,
        _ => Evaluation::NeedsWork,
    }
}

/// Reject text shorter than `min` characters
pub fn require_min_chars(text: &str, min: usize) -> Result<()> {
    let len = text.chars().count();
    if len < min {
        return Err(EcdoticaError::validation(format!(
            "Text is too short to analyze ({} characters, minimum {})",
            len, min
        )));
    }
    Ok(())
}

/// Required submission fields must not be blank
pub fn validate_submission(submission: &ManuscriptSubmission) -> Result<()> {
    let required = [
        ("title", &submission.title),
        ("author", &submission.author),
        ("email", &submission.email),
        ("content", &submission.content),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(EcdoticaError::validation(format!(
                "Missing required field: {}",
                field
            )));
        }
    }
    if !submission.email.contains('@') {
        return Err(EcdoticaError::validation(format!(
            "Invalid email address: {}",
            submission.email
        )));
    }
    Ok(())
}

/// Opaque id: first 12 hex chars of SHA-256(title + timestamp)
pub fn manuscript_id(title: &str, submitted_at: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(submitted_at.to_rfc3339().as_bytes());
    let digest = to_hex(&hasher.finalize());
    digest[..MANUSCRIPT_ID_LEN].to_string()
}

/// Hex SHA-256 of the manuscript text
pub fn document_hash(text: &str) -> String {
    to_hex(&Sha256::digest(text.as_bytes()))
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
