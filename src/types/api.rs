//! HTTP request and response bodies

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::{
    Decision, EditorialStatus, Evaluation, IssueDetail, QualityReport, RegistrationReceipt,
    ReviewSuggestion, StyleStatistics, Triage,
};

/// Service banner for `GET /`
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub api: String,
    pub version: String,
    pub status: String,
    pub endpoints: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Error body for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    pub status_code: u16,
}

// -----------------------------------------------------------------------------
// Text analysis
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct TextAnalysisRequest {
    pub text: String,
    /// Accepted for compatibility; the analyzer has no per-request options
    #[serde(default)]
    pub options: serde_json::Map<String, serde_json::Value>,
}

// -----------------------------------------------------------------------------
// Manuscripts
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ManuscriptSubmission {
    pub title: String,
    pub author: String,
    pub email: String,
    pub content: String,
    pub genre: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub manuscript_id: String,
    pub status: String,
    pub submission_date: DateTime<Utc>,
    pub author: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// SHA-256 of the content, hex
    pub document_hash: String,
    pub preliminary_analysis: QualityReport,
    pub auto_decision: Triage,
    pub message: String,
}

fn default_analysis_type() -> String {
    "complete".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ManuscriptAnalysisRequest {
    pub manuscript_id: Option<String>,
    pub content: String,
    /// complete, basic or critical
    #[serde(default = "default_analysis_type")]
    pub analysis_type: String,
}

#[derive(Debug, Serialize)]
pub struct EditorialIssues {
    pub total_issues: usize,
    pub issues: Vec<IssueDetail>,
}

#[derive(Debug, Serialize)]
pub struct ManuscriptAnalysisResponse {
    pub analysis_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manuscript_id: Option<String>,
    pub analyzed_at: DateTime<Utc>,
    pub quality_analysis: QualityReport,
    pub editorial_issues: EditorialIssues,
    /// Informational only; does not affect the score
    pub style_statistics: StyleStatistics,
    pub recommendations: Vec<String>,
    pub publication_ready: bool,
}

#[derive(Debug, Deserialize)]
pub struct QuickEvalQuery {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct QuickEvalResponse {
    pub words: usize,
    pub quality_score: u8,
    pub reading_time: f64,
    pub evaluation: Evaluation,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file_name: String,
    pub format: String,
    pub analyzed_at: DateTime<Utc>,
    pub analysis: QualityReport,
    pub style_statistics: StyleStatistics,
    pub editorial_status: EditorialStatus,
    pub recommendation: String,
}

#[derive(Debug, Deserialize)]
pub struct DecisionRequest {
    pub manuscript_id: String,
    /// Parsed into `Decision`; kept as text so bad values become a 400
    pub decision: String,
    pub feedback: String,
    pub editor_name: String,
}

#[derive(Debug, Serialize)]
pub struct DecisionResponse {
    pub manuscript_id: String,
    pub decision: Decision,
    pub decided_at: DateTime<Utc>,
    pub editor: String,
    pub feedback: String,
    pub status: String,
    pub next_steps: String,
}

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub title: String,
    pub content: String,
}

// -----------------------------------------------------------------------------
// Integrations
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct BlockchainRegisterRequest {
    pub document_hash: String,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct BlockchainRegisterResponse {
    pub status: String,
    #[serde(flatten)]
    pub receipt: RegistrationReceipt,
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub text: String,
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub status: String,
    pub suggestions: Vec<ReviewSuggestion>,
}
