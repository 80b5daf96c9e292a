//! Deadline-check result types.
//!
//! A stage owns a fixed, ordered list of checks; the runner combines their
//! results into a `CompositeStatus`. Internally everything is typed — the
//! semicolon-joined strings of the source reports exist only at the
//! serialization boundary (`status_string` / `completion_string`).

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of one deadline rule. Wire names match the check
/// configuration of the monitoring reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckId {
    #[serde(rename = "exceptionStatus")]
    ExceptionStatus,
    #[serde(rename = "closed125days")]
    Closed125Days,
    #[serde(rename = "executionDocumentReceivedL")]
    ExecutionDocumentReceivedLawsuit,
    #[serde(rename = "decision45days")]
    Decision45Days,
    #[serde(rename = "decisionReceipt3days")]
    DecisionReceipt3Days,
    #[serde(rename = "decisionTransfer1day")]
    DecisionTransfer1Day,
    #[serde(rename = "nextHearing3days")]
    NextHearing3Days,
    #[serde(rename = "hearingInterval2days")]
    HearingInterval2Days,
    #[serde(rename = "consideration60days")]
    Consideration60Days,
    #[serde(rename = "courtReaction7days")]
    CourtReaction7Days,
    #[serde(rename = "firstStatusChanged14days")]
    FirstStatusChanged14Days,
    #[serde(rename = "closed90Days")]
    Closed90Days,
    #[serde(rename = "executionDocumentReceivedO")]
    ExecutionDocumentReceivedOrder,
    #[serde(rename = "courtReaction60Days")]
    CourtReaction60Days,
    #[serde(rename = "firstStatus14Days")]
    FirstStatus14Days,
    /// Request-turnaround check over the document-monitoring table; never
    /// part of a case stage.
    #[serde(rename = "documentRequest14days")]
    DocumentRequest14Days,
}

impl CheckId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExceptionStatus => "exceptionStatus",
            Self::Closed125Days => "closed125days",
            Self::ExecutionDocumentReceivedLawsuit => "executionDocumentReceivedL",
            Self::Decision45Days => "decision45days",
            Self::DecisionReceipt3Days => "decisionReceipt3days",
            Self::DecisionTransfer1Day => "decisionTransfer1day",
            Self::NextHearing3Days => "nextHearing3days",
            Self::HearingInterval2Days => "hearingInterval2days",
            Self::Consideration60Days => "consideration60days",
            Self::CourtReaction7Days => "courtReaction7days",
            Self::FirstStatusChanged14Days => "firstStatusChanged14days",
            Self::Closed90Days => "closed90Days",
            Self::ExecutionDocumentReceivedOrder => "executionDocumentReceivedO",
            Self::CourtReaction60Days => "courtReaction60Days",
            Self::FirstStatus14Days => "firstStatus14Days",
            Self::DocumentRequest14Days => "documentRequest14days",
        }
    }
}

/// Exceptional case status republished by the `exceptions` stage check.
/// Wire spellings are kept from the source reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExceptionKind {
    #[serde(rename = "reopened")]
    Reopened,
    #[serde(rename = "complaint_filed")]
    ComplaintFiled,
    #[serde(rename = "error_dublicate")]
    ErrorDuplicate,
    #[serde(rename = "withdraw_by_the_initiator")]
    WithdrawnByInitiator,
}

impl ExceptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reopened => "reopened",
            Self::ComplaintFiled => "complaint_filed",
            Self::ErrorDuplicate => "error_dublicate",
            Self::WithdrawnByInitiator => "withdraw_by_the_initiator",
        }
    }
}

/// Outcome of one deadline check.
///
/// The status set is open: `UpcomingDeadline` only occurs in the document
/// turnaround check, exception kinds only in the exceptions stage, and
/// `Other` carries any future value through the parse boundary intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Timely,
    Overdue,
    /// A required input date was absent — a valid terminal status.
    NoData,
    UpcomingDeadline,
    Exception(ExceptionKind),
    Other(String),
}

impl CheckStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Timely => "timely",
            Self::Overdue => "overdue",
            Self::NoData => "no_data",
            Self::UpcomingDeadline => "upcoming_deadline",
            Self::Exception(kind) => kind.as_str(),
            Self::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "timely" => Self::Timely,
            "overdue" => Self::Overdue,
            "no_data" => Self::NoData,
            "upcoming_deadline" => Self::UpcomingDeadline,
            "reopened" => Self::Exception(ExceptionKind::Reopened),
            "complaint_filed" => Self::Exception(ExceptionKind::ComplaintFiled),
            "error_dublicate" => Self::Exception(ExceptionKind::ErrorDuplicate),
            "withdraw_by_the_initiator" => {
                Self::Exception(ExceptionKind::WithdrawnByInitiator)
            }
            other => Self::Other(other.to_string()),
        }
    }

    /// Case-insensitive comparison, as task triggers require.
    pub fn matches(&self, other: &CheckStatus) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CheckStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CheckStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// Result of evaluating a single check against a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub check: CheckId,
    pub status: CheckStatus,
    /// Whether the monitored action has actually happened (completion date
    /// present, all sub-conditions met, transfer confirmed, …).
    pub completed: bool,
}

impl CheckResult {
    pub fn new(check: CheckId, status: CheckStatus, completed: bool) -> Self {
        Self {
            check,
            status,
            completed,
        }
    }

    /// Degraded result for missing or malformed inputs.
    pub fn no_data(check: CheckId) -> Self {
        Self::new(check, CheckStatus::NoData, false)
    }
}

/// Ordered bundle of per-check results for one case's stage.
///
/// Position is load-bearing: task triggers reference checks by index, so
/// results are never reordered or dropped, `no_data` included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeStatus {
    results: Vec<CheckResult>,
}

impl CompositeStatus {
    pub fn new(results: Vec<CheckResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn get(&self, index: usize) -> Option<&CheckResult> {
        self.results.get(index)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Semicolon-joined status encoding for the report boundary,
    /// e.g. `"timely;overdue;no_data"`. Empty composites encode as
    /// `"no_data"`.
    pub fn status_string(&self) -> String {
        if self.results.is_empty() {
            return "no_data".to_string();
        }
        self.results
            .iter()
            .map(|r| r.status.as_str())
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Semicolon-joined completion flags, e.g. `"true;false;true"`.
    /// Empty composites encode as `"false"`.
    pub fn completion_string(&self) -> String {
        if self.results.is_empty() {
            return "false".to_string();
        }
        self.results
            .iter()
            .map(|r| if r.completed { "true" } else { "false" })
            .collect::<Vec<_>>()
            .join(";")
    }
}
