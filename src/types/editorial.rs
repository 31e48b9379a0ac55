//! Editorial statuses and decisions layered on top of a quality score

use serde::{Deserialize, Serialize};
use crate::error::{EcdoticaError, Result};

/// Preliminary verdict attached to a fresh submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Triage {
    Promising,
    ReviewNeeded,
    NeedsImprovement,
}

/// Routing outcome for an uploaded manuscript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditorialStatus {
    Accepted,
    ReviewNeeded,
    Rejected,
}

impl EditorialStatus {
    pub fn color_name(&self) -> &'static str {
        match self {
            EditorialStatus::Accepted => "green",
            EditorialStatus::ReviewNeeded => "yellow",
            EditorialStatus::Rejected => "red",
        }
    }
}

impl std::fmt::Display for EditorialStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EditorialStatus::Accepted => "ACCEPTED",
            EditorialStatus::ReviewNeeded => "REVIEW_NEEDED",
            EditorialStatus::Rejected => "REJECTED",
        };
        write!(f, "{}", name)
    }
}

/// Label for the quick evaluation endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evaluation {
    Excellent,
    Good,
    NeedsWork,
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Evaluation::Excellent => "Excellent",
            Evaluation::Good => "Good",
            Evaluation::NeedsWork => "Needs improvement",
        };
        write!(f, "{}", label)
    }
}

/// Decision an editor records for a manuscript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Accepted,
    Rejected,
    RevisionNeeded,
}

impl Decision {
    /// What happens after the decision is registered
    pub fn next_steps(&self) -> &'static str {
        match self {
            Decision::Accepted => "Send the contract and start the editing process",
            Decision::Rejected => "Send the rejection letter to the author",
            Decision::RevisionNeeded => "Send detailed feedback to the author for revision",
        }
    }
}

impl std::str::FromStr for Decision {
    type Err = EcdoticaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "accepted" => Ok(Decision::Accepted),
            "rejected" => Ok(Decision::Rejected),
            "revision_needed" => Ok(Decision::RevisionNeeded),
            other => Err(EcdoticaError::validation(format!(
                "Invalid decision '{}': expected accepted, rejected or revision_needed",
                other
            ))),
        }
    }
}
