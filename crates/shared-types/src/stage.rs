use serde::{Deserialize, Serialize};
use std::fmt;

/// Current processing stage of a case.
///
/// Wire labels match the monitoring report columns. Assignment is total:
/// cases matched by no stage filter land in `OutsideStageFilters` and are
/// excluded from checks and task generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "exceptions")]
    Exceptions,
    #[serde(rename = "closed")]
    Closed,
    #[serde(rename = "executionDocumentReceived")]
    ExecutionDocumentReceived,
    #[serde(rename = "decisionMade")]
    DecisionMade,
    #[serde(rename = "underConsideration")]
    UnderConsideration,
    #[serde(rename = "courtReaction")]
    CourtReaction,
    #[serde(rename = "firstStatusChanged")]
    FirstStatusChanged,
    #[serde(rename = "outside_stage_filters")]
    OutsideStageFilters,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exceptions => "exceptions",
            Self::Closed => "closed",
            Self::ExecutionDocumentReceived => "executionDocumentReceived",
            Self::DecisionMade => "decisionMade",
            Self::UnderConsideration => "underConsideration",
            Self::CourtReaction => "courtReaction",
            Self::FirstStatusChanged => "firstStatusChanged",
            Self::OutsideStageFilters => "outside_stage_filters",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
