//! Core modules for Ecdotica

pub mod analyzer;
pub mod style;
pub mod policy;
pub mod extract;
pub mod integrations;
pub mod api;

pub use analyzer::{TextQualityAnalyzer, AnalyzerConfig};
pub use extract::{DocumentFormat, TextExtractor, PlainTextExtractor, ExtractorRegistry};
pub use integrations::{
    BlockchainRegistry, ReviewAssistant, Publisher, UnconfiguredBlockchain,
    UnconfiguredReviewAssistant, UnconfiguredPublisher,
};
pub use api::{create_router, create_router_with_state, run_server, AppState};
