//! Ecdotica: manuscript text-quality analysis for an editorial platform
//!
//! text → TextQualityAnalyzer → QualityReport → editorial policy → HTTP / CLI

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use error::{EcdoticaError, Result};

// =============================================================================
// TOKEN THRESHOLDS
// =============================================================================

/// Default length a word must exceed to count as complex
pub const DEFAULT_COMPLEX_WORD_THRESHOLD: usize = 12;

/// Words must be longer than this to enter the repetition frequency map
pub const REPETITION_MIN_WORD_LEN: usize = 4;

/// Absolute floor for the repetition threshold (short texts)
pub const REPETITION_FLOOR: usize = 10;

/// Proportional repetition threshold: one occurrence per this many words
pub const REPETITION_WORDS_PER_HIT: usize = 100;

/// Identical consecutive tokens that make an immediate repetition
pub const IMMEDIATE_REPETITION_RUN: usize = 3;

/// Paragraphs above this many words are overlong
pub const LONG_PARAGRAPH_WORDS: usize = 200;

/// Reading speed for the time estimate (words per minute)
pub const READING_WORDS_PER_MINUTE: f64 = 250.0;

// =============================================================================
// SENTENCE LENGTH BAND (inclusive)
// =============================================================================

/// Average above this is "too long"
pub const SENTENCE_AVG_MAX: f64 = 30.0;

/// Average below this is "too short"
pub const SENTENCE_AVG_MIN: f64 = 10.0;

// =============================================================================
// SCORE PENALTIES (start at 100, clamp to 0..=100)
// =============================================================================

pub const SCORE_CEILING: i64 = 100;

/// Manuscripts under this many words lose `PENALTY_SHORT_MANUSCRIPT`
pub const MANUSCRIPT_MIN_WORDS: usize = 5000;
pub const PENALTY_SHORT_MANUSCRIPT: i64 = 10;

/// Average sentence length outside the band
pub const PENALTY_SENTENCE_BAND: i64 = 15;

/// Complex word ratio above `COMPLEX_RATIO_LIMIT`
pub const COMPLEX_RATIO_LIMIT: f64 = 0.3;
pub const PENALTY_COMPLEX_RATIO: i64 = 10;

/// Fewer paragraphs than `MIN_PARAGRAPHS`
pub const MIN_PARAGRAPHS: usize = 5;
pub const PENALTY_FEW_PARAGRAPHS: i64 = 10;

/// Per detected issue
pub const PENALTY_PER_ISSUE: i64 = 5;

// =============================================================================
// REQUEST POLICY
// =============================================================================

/// Minimum characters for a detailed manuscript analysis
pub const MIN_ANALYZE_CHARS: usize = 100;

/// Minimum characters for a quick evaluation
pub const MIN_QUICK_EVAL_CHARS: usize = 50;

/// Maximum uploaded document size (10 MB)
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
