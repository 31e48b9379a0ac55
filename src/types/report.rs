//! Analysis output structures

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::types::{Issue, StyleStatistics};

/// Result of analyzing one manuscript text.
///
/// Built once per call and never mutated; identical text under the same
/// analyzer config always yields an equal report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub word_count: usize,
    /// Non-empty segments between runs of `.`, `!`, `?`
    pub sentence_count: usize,
    /// Non-empty segments between blank lines
    pub paragraph_count: usize,
    /// `word_count / max(sentence_count, 1)`
    pub avg_words_per_sentence: f64,
    /// Share of words above the complexity threshold, 0.0-1.0
    pub complex_word_ratio: f64,
    /// 0-100
    pub quality_score: u8,
    /// Issue messages in detection order
    pub issues: Vec<String>,
    /// Case-folded words above the repetition threshold
    pub repeated_words: BTreeMap<String, usize>,
    pub estimated_reading_time_minutes: f64,
}

impl QualityReport {
    /// One-line summary (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "score={} | words={} | sentences={} | paragraphs={} | avg={:.2} | complex={:.3} | issues={}",
            self.quality_score,
            self.word_count,
            self.sentence_count,
            self.paragraph_count,
            self.avg_words_per_sentence,
            self.complex_word_ratio,
            self.issues.len()
        )
    }
}

/// A report together with the typed issues behind its messages and the
/// informational style statistics
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub report: QualityReport,
    pub findings: Vec<Issue>,
    pub style: StyleStatistics,
}
