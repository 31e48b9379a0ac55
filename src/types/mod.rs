//! Core types for Ecdotica

mod report;
mod issue;
mod style;
mod editorial;
mod integration;
mod api;

pub use report::{QualityReport, Inspection};
pub use issue::{Issue, IssueCategory, IssueDetail};
pub use style::{StyleStatistics, WordFrequency, PunctuationCounts, ReadingLevel};
pub use editorial::{Triage, EditorialStatus, Evaluation, Decision};
pub use integration::{
    RegistrationReceipt, Verification, ReviewSuggestion, Inconsistency, SimilarityReport,
    PublishedPost,
};
pub use api::{
    RootResponse, HealthResponse, ErrorResponse, TextAnalysisRequest, ManuscriptSubmission,
    SubmissionResponse, ManuscriptAnalysisRequest, ManuscriptAnalysisResponse, EditorialIssues,
    QuickEvalQuery, QuickEvalResponse, UploadResponse, DecisionRequest, DecisionResponse,
    PublishRequest, BlockchainRegisterRequest, BlockchainRegisterResponse, ReviewRequest,
    ReviewResponse,
};
