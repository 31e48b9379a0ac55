//! Informational style statistics reported next to the quality report

use serde::{Deserialize, Serialize};

/// Vocabulary, readability and narrative texture of a text.
///
/// Purely descriptive; none of these values move the quality score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleStatistics {
    /// Distinct case-folded words
    pub unique_words: usize,
    /// `unique_words / max(word_count, 1)`
    pub type_token_ratio: f64,
    /// Most frequent words longer than 3 characters, highest count first
    pub top_words: Vec<WordFrequency>,
    pub avg_syllables_per_word: f64,
    /// Flesch-Szigriszt readability for Spanish prose
    pub flesch_szigriszt: f64,
    pub reading_level: ReadingLevel,
    /// Share of words ending in `-mente`
    pub mente_adverb_ratio: f64,
    /// Share of words inside quoted or dash-introduced dialogue
    pub dialogue_ratio: f64,
    /// Population standard deviation of words per sentence
    pub sentence_length_deviation: f64,
    pub punctuation: PunctuationCounts,
    /// Distinct discourse connectives present ("sin embargo", "además", ...)
    pub connectives_found: usize,
    pub connectives_per_paragraph: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunctuationCounts {
    pub semicolons: usize,
    /// `...` runs and `…`
    pub ellipses: usize,
    /// Em and en dashes
    pub dashes: usize,
}

/// Flesch-Szigriszt band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingLevel {
    VeryEasy,
    Easy,
    FairlyEasy,
    Standard,
    FairlyDifficult,
    Difficult,
    VeryDifficult,
}

impl ReadingLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            ReadingLevel::VeryEasy
        } else if score >= 80.0 {
            ReadingLevel::Easy
        } else if score >= 70.0 {
            ReadingLevel::FairlyEasy
        } else if score >= 60.0 {
            ReadingLevel::Standard
        } else if score >= 50.0 {
            ReadingLevel::FairlyDifficult
        } else if score >= 30.0 {
            ReadingLevel::Difficult
        } else {
            ReadingLevel::VeryDifficult
        }
    }
}

impl std::fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReadingLevel::VeryEasy => "Very easy (5th grade)",
            ReadingLevel::Easy => "Easy (6th grade)",
            ReadingLevel::FairlyEasy => "Fairly easy (7th grade)",
            ReadingLevel::Standard => "Standard (8th-9th grade)",
            ReadingLevel::FairlyDifficult => "Fairly difficult (10th-12th grade)",
            ReadingLevel::Difficult => "Difficult (university)",
            ReadingLevel::VeryDifficult => "Very difficult (postgraduate)",
        };
        write!(f, "{}", label)
    }
}
