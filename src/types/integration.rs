//! Payloads exchanged with external integrations (blockchain, AI review, publishing)

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Proof that a document hash was anchored on a chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub transaction_hash: String,
    pub timestamp: DateTime<Utc>,
    pub blockchain: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verification {
    pub document_hash: String,
    pub verified: bool,
    pub blockchain: String,
}

/// One contextual editing suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSuggestion {
    #[serde(rename = "type")]
    pub kind: String,
    /// Character offset into the reviewed text
    pub position: usize,
    pub message: String,
    pub suggestion: String,
}

/// Narrative inconsistency found by a consistency check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inconsistency {
    pub position: usize,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityReport {
    /// 0.0-1.0
    pub similarity_score: f64,
    pub sources: Vec<String>,
}

/// Post created on the publishing platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedPost {
    pub post_id: String,
    pub url: String,
}
