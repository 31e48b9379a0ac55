//! Issues detected in a manuscript

use serde::{Deserialize, Serialize};
use crate::{LONG_PARAGRAPH_WORDS, SENTENCE_AVG_MAX, SENTENCE_AVG_MIN};

/// Broad family an issue belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Structure,
    Style,
    Formatting,
    Punctuation,
    Dialogue,
}

/// A structural or stylistic problem, in detection order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Average sentence length above the band
    LongSentences,
    /// Average sentence length below the band
    ShortSentences,
    /// Same word three times in a row (first occurrence only)
    ImmediateRepetition { word: String },
    /// Paragraphs over the word limit
    LongParagraphs { count: usize },
    /// Two consecutive spaces somewhere in the text
    DoubleSpaces,
    /// Odd number of `"` characters
    UnmatchedQuotes,
    /// `. ` followed by a lowercase letter
    MissingCapitalization { cases: usize },
}

impl Issue {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::LongSentences => "long_sentences",
            Self::ShortSentences => "short_sentences",
            Self::ImmediateRepetition { .. } => "immediate_repetition",
            Self::LongParagraphs { .. } => "long_paragraphs",
            Self::DoubleSpaces => "double_spaces",
            Self::UnmatchedQuotes => "unmatched_quotes",
            Self::MissingCapitalization { .. } => "missing_capitalization",
        }
    }

    pub fn category(&self) -> IssueCategory {
        match self {
            Self::LongSentences | Self::ShortSentences | Self::LongParagraphs { .. } => {
                IssueCategory::Structure
            }
            Self::ImmediateRepetition { .. } => IssueCategory::Style,
            Self::DoubleSpaces => IssueCategory::Formatting,
            Self::UnmatchedQuotes => IssueCategory::Dialogue,
            Self::MissingCapitalization { .. } => IssueCategory::Punctuation,
        }
    }

    /// Flatten for JSON responses that group issues by category
    pub fn detail(&self) -> IssueDetail {
        IssueDetail {
            category: self.category(),
            code: self.code(),
            message: self.to_string(),
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LongSentences => write!(
                f,
                "Sentences are too long (average above {} words)",
                SENTENCE_AVG_MAX
            ),
            Self::ShortSentences => write!(
                f,
                "Sentences are too short (average below {} words)",
                SENTENCE_AVG_MIN
            ),
            Self::ImmediateRepetition { word } => {
                write!(f, "Word \"{}\" repeated three times in a row", word)
            }
            Self::LongParagraphs { count } => write!(
                f,
                "{} paragraph(s) exceed {} words",
                count, LONG_PARAGRAPH_WORDS
            ),
            Self::DoubleSpaces => write!(f, "Doubled spaces detected"),
            Self::UnmatchedQuotes => write!(f, "Unmatched quotation marks"),
            Self::MissingCapitalization { cases } => write!(
                f,
                "Possible missing capitalization after a period: {} case(s)",
                cases
            ),
        }
    }
}

/// Issue as rendered in the editorial-issues section of an API response
#[derive(Debug, Clone, Serialize)]
pub struct IssueDetail {
    #[serde(rename = "type")]
    pub category: IssueCategory,
    pub code: &'static str,
    pub message: String,
}
