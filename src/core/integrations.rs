//! External integrations: blockchain registration, AI-assisted review and
//! publishing to the editorial website.
//!
//! Only the interfaces exist. The shipped implementations answer
//! `NotImplemented`, which the API turns into 501.

use async_trait::async_trait;
use crate::error::{EcdoticaError, Result};
use crate::types::{
    Inconsistency, PublishedPost, RegistrationReceipt, ReviewSuggestion, SimilarityReport,
    Verification,
};

/// Anchors document hashes on a public chain
#[async_trait]
pub trait BlockchainRegistry: Send + Sync {
    async fn register(
        &self,
        document_hash: &str,
        metadata: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<RegistrationReceipt>;

    async fn verify(&self, document_hash: &str) -> Result<Verification>;
}

/// Language-model backed editorial assistant
#[async_trait]
pub trait ReviewAssistant: Send + Sync {
    async fn suggest(&self, text: &str, context: Option<&str>) -> Result<Vec<ReviewSuggestion>>;

    async fn consistency_check(&self, text: &str) -> Result<Vec<Inconsistency>>;

    async fn plagiarism_check(&self, text: &str) -> Result<SimilarityReport>;
}

/// Hands accepted manuscripts to the publishing platform
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, manuscript_id: &str, title: &str, content: &str) -> Result<PublishedPost>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredBlockchain;

#[async_trait]
impl BlockchainRegistry for UnconfiguredBlockchain {
    async fn register(
        &self,
        _document_hash: &str,
        _metadata: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<RegistrationReceipt> {
        Err(EcdoticaError::not_implemented("Blockchain registration"))
    }

    async fn verify(&self, _document_hash: &str) -> Result<Verification> {
        Err(EcdoticaError::not_implemented("Blockchain verification"))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredReviewAssistant;

#[async_trait]
impl ReviewAssistant for UnconfiguredReviewAssistant {
    async fn suggest(&self, _text: &str, _context: Option<&str>) -> Result<Vec<ReviewSuggestion>> {
        Err(EcdoticaError::not_implemented("AI review suggestions"))
    }

    async fn consistency_check(&self, _text: &str) -> Result<Vec<Inconsistency>> {
        Err(EcdoticaError::not_implemented("Narrative consistency check"))
    }

    async fn plagiarism_check(&self, _text: &str) -> Result<SimilarityReport> {
        Err(EcdoticaError::not_implemented("Plagiarism check"))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredPublisher;

#[async_trait]
impl Publisher for UnconfiguredPublisher {
    async fn publish(&self, _manuscript_id: &str, _title: &str, _content: &str) -> Result<PublishedPost> {
        Err(EcdoticaError::not_implemented("WordPress publishing"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_blockchain() {
        let registry: Box<dyn BlockchainRegistry> = Box::new(UnconfiguredBlockchain);
        let err = registry.verify("abc").await.unwrap_err();
        assert!(matches!(err, EcdoticaError::NotImplemented { .. }));
    }

    #[tokio::test]
    async fn test_unconfigured_review_and_publisher() {
        assert!(UnconfiguredReviewAssistant.suggest("t", None).await.is_err());
        assert!(UnconfiguredReviewAssistant.plagiarism_check("t").await.is_err());
        let err = UnconfiguredPublisher.publish("id", "t", "c").await.unwrap_err();
        assert_eq!(err.to_string(), "WordPress publishing is not implemented");
    }
}
