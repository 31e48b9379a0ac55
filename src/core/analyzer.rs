//! Text quality analyzer: word/sentence/paragraph statistics, issue detection
//! and a 0-100 quality score.
//!
//! Pure and stateless. The same text under the same config always produces
//! the same report; there is no clock or randomness in here.

use std::collections::{BTreeMap, HashMap};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use crate::{
    DEFAULT_COMPLEX_WORD_THRESHOLD, REPETITION_MIN_WORD_LEN, REPETITION_FLOOR,
    REPETITION_WORDS_PER_HIT, IMMEDIATE_REPETITION_RUN, LONG_PARAGRAPH_WORDS,
    READING_WORDS_PER_MINUTE, SENTENCE_AVG_MAX, SENTENCE_AVG_MIN, SCORE_CEILING,
    MANUSCRIPT_MIN_WORDS, PENALTY_SHORT_MANUSCRIPT, PENALTY_SENTENCE_BAND,
    COMPLEX_RATIO_LIMIT, PENALTY_COMPLEX_RATIO, MIN_PARAGRAPHS, PENALTY_FEW_PARAGRAPHS,
    PENALTY_PER_ISSUE,
};
use crate::core::style;
use crate::types::{Inspection, Issue, QualityReport};

lazy_static! {
    /// Alphanumeric runs, Unicode aware (accents count as letters)
    static ref RE_WORD: Regex = Regex::new(r"[\p{Alphabetic}\p{N}]+").unwrap();

    /// Runs of sentence-ending punctuation
    static ref RE_SENTENCE_BREAK: Regex = Regex::new(r"[.!?]+").unwrap();

    /// A newline followed by at least one blank (or whitespace-only) line
    static ref RE_PARAGRAPH_BREAK: Regex = Regex::new(r"\r?\n(?:[ \t]*\r?\n)+").unwrap();

    /// Period, space, lowercase letter
    static ref RE_MISSING_CAPITAL: Regex = Regex::new(r"\. \p{Ll}").unwrap();
}

/// Tunables for the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// A word longer than this many characters is complex
    pub complex_word_threshold: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            complex_word_threshold: DEFAULT_COMPLEX_WORD_THRESHOLD,
        }
    }
}

/// Counts every later step is derived from
#[derive(Debug)]
pub(crate) struct TextStats<'a> {
    pub(crate) words: Vec<&'a str>,
    pub(crate) folded: Vec<String>,
    pub(crate) sentence_count: usize,
    /// Words per non-empty sentence, in order
    pub(crate) sentence_lengths: Vec<usize>,
    pub(crate) paragraphs: Vec<&'a str>,
}

impl TextStats<'_> {
    pub(crate) fn word_count(&self) -> usize {
        self.words.len()
    }

    pub(crate) fn avg_words_per_sentence(&self) -> f64 {
        self.word_count() as f64 / self.sentence_count.max(1) as f64
    }
}

/// Manuscript text quality analyzer
#[derive(Debug, Clone, Default)]
pub struct TextQualityAnalyzer {
    config: AnalyzerConfig,
}

impl TextQualityAnalyzer {
    /// Create analyzer with the default complexity threshold
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyze text and return the quality report
    pub fn analyze(&self, text: &str) -> QualityReport {
        self.inspect(text).report
    }

    /// Analyze text and keep the typed issues next to the report
    #[tracing::instrument(level = "debug", skip(self, text), fields(text_len = text.len()))]
    pub fn inspect(&self, text: &str) -> Inspection {
        let stats = measure(text);
        let word_count = stats.word_count();
        let avg_words_per_sentence = stats.avg_words_per_sentence();

        let complex_words = stats
            .words
            .iter()
            .filter(|w| w.chars().count() > self.config.complex_word_threshold)
            .count();
        let complex_word_ratio = complex_words as f64 / word_count.max(1) as f64;

        let repeated_words = repeated_words(&stats.folded, word_count);
        let findings = detect_issues(text, &stats);

        let quality_score = score(
            word_count,
            avg_words_per_sentence,
            complex_word_ratio,
            stats.paragraphs.len(),
            findings.len(),
        );

        tracing::debug!(
            word_count,
            sentence_count = stats.sentence_count,
            issues = findings.len(),
            quality_score,
            "analysis complete"
        );

        let report = QualityReport {
            word_count,
            sentence_count: stats.sentence_count,
            paragraph_count: stats.paragraphs.len(),
            avg_words_per_sentence,
            complex_word_ratio,
            quality_score,
            issues: findings.iter().map(ToString::to_string).collect(),
            repeated_words,
            estimated_reading_time_minutes: word_count as f64 / READING_WORDS_PER_MINUTE,
        };

        let style = style::statistics(text, &stats);

        Inspection {
            report,
            findings,
            style,
        }
    }
}

/// Tokenize into words, sentences and paragraphs
fn measure(text: &str) -> TextStats<'_> {
    let words: Vec<&str> = RE_WORD.find_iter(text).map(|m| m.as_str()).collect();
    let folded = words.iter().map(|w| w.to_lowercase()).collect();

    let sentence_lengths: Vec<usize> = RE_SENTENCE_BREAK
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .map(count_words)
        .collect();

    let paragraphs = RE_PARAGRAPH_BREAK
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .collect();

    TextStats {
        words,
        folded,
        sentence_count: sentence_lengths.len(),
        sentence_lengths,
        paragraphs,
    }
}

pub(crate) fn count_words(text: &str) -> usize {
    RE_WORD.find_iter(text).count()
}

/// Long case-folded words whose frequency exceeds max(floor, words / 100)
fn repeated_words(folded: &[String], word_count: usize) -> BTreeMap<String, usize> {
    let threshold = REPETITION_FLOOR.max(word_count / REPETITION_WORDS_PER_HIT);

    let mut freq: HashMap<&str, usize> = HashMap::new();
    for word in folded {
        if word.chars().count() > REPETITION_MIN_WORD_LEN {
            *freq.entry(word.as_str()).or_insert(0) += 1;
        }
    }

    freq.into_iter()
        .filter(|(_, count)| *count > threshold)
        .map(|(word, count)| (word.to_string(), count))
        .collect()
}

/// First run of identical consecutive tokens, if any
fn immediate_repetition(folded: &[String]) -> Option<&str> {
    folded
        .windows(IMMEDIATE_REPETITION_RUN)
        .find(|run| run.iter().all(|w| *w == run[0]))
        .map(|run| run[0].as_str())
}

/// Run every check in order; each one appends independently
fn detect_issues(text: &str, stats: &TextStats<'_>) -> Vec<Issue> {
    let mut issues = Vec::new();

    let avg = stats.avg_words_per_sentence();
    if avg > SENTENCE_AVG_MAX {
        issues.push(Issue::LongSentences);
    } else if avg < SENTENCE_AVG_MIN {
        issues.push(Issue::ShortSentences);
    }

    if let Some(word) = immediate_repetition(&stats.folded) {
        issues.push(Issue::ImmediateRepetition {
            word: word.to_string(),
        });
    }

    let long_paragraphs = stats
        .paragraphs
        .iter()
        .filter(|p| count_words(p) > LONG_PARAGRAPH_WORDS)
        .count();
    if long_paragraphs > 0 {
        issues.push(Issue::LongParagraphs {
            count: long_paragraphs,
        });
    }

    if text.contains("  ") {
        issues.push(Issue::DoubleSpaces);
    }

    if text.matches('"').count() % 2 != 0 {
        issues.push(Issue::UnmatchedQuotes);
    }

    let cases = RE_MISSING_CAPITAL.find_iter(text).count();
    if cases > 0 {
        issues.push(Issue::MissingCapitalization { cases });
    }

    issues
}

/// Flat penalties from 100, clamped to 0..=100
fn score(
    word_count: usize,
    avg_words_per_sentence: f64,
    complex_word_ratio: f64,
    paragraph_count: usize,
    issue_count: usize,
) -> u8 {
    let mut score = SCORE_CEILING;

    if word_count < MANUSCRIPT_MIN_WORDS {
        score -= PENALTY_SHORT_MANUSCRIPT;
    }
    if !(SENTENCE_AVG_MIN..=SENTENCE_AVG_MAX).contains(&avg_words_per_sentence) {
        score -= PENALTY_SENTENCE_BAND;
    }
    if complex_word_ratio > COMPLEX_RATIO_LIMIT {
        score -= PENALTY_COMPLEX_RATIO;
    }
    if paragraph_count < MIN_PARAGRAPHS {
        score -= PENALTY_FEW_PARAGRAPHS;
    }
    score -= PENALTY_PER_ISSUE.saturating_mul(issue_count as i64);

    score.clamp(0, SCORE_CEILING) as u8
}

// =============================================================================
// TESTS
// =============================================================================
