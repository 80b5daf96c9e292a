//! Court-case domain types.
//!
//! A `CaseRecord` is one row of the detailed case report after ingestion:
//! typed fields for everything the engine evaluates, plus an open
//! `metadata` bag for source columns referenced only by special-condition
//! triggers. The engine is read-only over case data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of court proceeding. Fixed for the lifetime of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionType {
    Lawsuit,
    Order,
}

impl ProductionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lawsuit => "lawsuit",
            Self::Order => "order",
        }
    }
}

/// Case status as reported by the source system.
///
/// Statuses not in this set deserialize as `Unknown` and fall outside
/// every stage filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Closed,
    ConditionallyClosed,
    UnderConsideration,
    DecisionMade,
    AwaitingCourtResponse,
    PreparationOfDocuments,
    CourtActInForce,
    Reopened,
    ComplaintFiled,
    ErrorDuplicate,
    WithdrawnByInitiator,
    #[serde(other)]
    Unknown,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::ConditionallyClosed => "conditionally_closed",
            Self::UnderConsideration => "under_consideration",
            Self::DecisionMade => "decision_made",
            Self::AwaitingCourtResponse => "awaiting_court_response",
            Self::PreparationOfDocuments => "preparation_of_documents",
            Self::CourtActInForce => "court_act_in_force",
            Self::Reopened => "reopened",
            Self::ComplaintFiled => "complaint_filed",
            Self::ErrorDuplicate => "error_duplicate",
            Self::WithdrawnByInitiator => "withdrawn_by_initiator",
            Self::Unknown => "unknown",
        }
    }
}

/// One court case from the detailed report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseRecord {
    pub case_code: String,
    pub case_status: CaseStatus,
    pub production_type: ProductionType,
    /// Date the lawsuit/application was filed.
    #[serde(default)]
    pub filing_date: Option<NaiveDate>,
    /// Fallback anchor when the filing date is missing (last request date).
    #[serde(default)]
    pub last_request_date: Option<NaiveDate>,
    #[serde(default)]
    pub case_closing_date: Option<NaiveDate>,
    /// Date of the court determination (case accepted for proceedings).
    #[serde(default)]
    pub determination_date: Option<NaiveDate>,
    #[serde(default)]
    pub previous_hearing_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_hearing_date: Option<NaiveDate>,
    /// Date the case was accepted for decision proceedings.
    #[serde(default)]
    pub decision_court_date: Option<NaiveDate>,
    /// Date the court decision was rendered.
    #[serde(default)]
    pub court_decision_date: Option<NaiveDate>,
    /// Date the rendered decision was received by the department.
    #[serde(default)]
    pub decision_receipt_date: Option<NaiveDate>,
    /// Actual receipt date of the execution document.
    #[serde(default)]
    pub actual_receipt_date: Option<NaiveDate>,
    /// Actual transfer date of the execution document.
    #[serde(default)]
    pub actual_transfer_date: Option<NaiveDate>,
    /// Characteristics of the final court act, when rendered.
    #[serde(default)]
    pub final_court_act: Option<String>,
    /// Court determination text; "Судебный приказ" marks an issued order.
    #[serde(default)]
    pub court_determination: Option<String>,
    #[serde(default)]
    pub responsible_executor: Option<String>,
    /// Extra source columns keyed by logical name (gosb, court, category…).
    /// Special-condition triggers may read from here.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl CaseRecord {
    /// Anchor date for filing-based deadlines: the filing date, falling
    /// back to the last request date when the source left it empty.
    pub fn filing_anchor(&self) -> Option<NaiveDate> {
        self.filing_date.or(self.last_request_date)
    }

    /// Resolve an extra source column from `metadata` as a string.
    pub fn metadata_str(&self, column: &str) -> Option<String> {
        match self.metadata.get(column)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// Court-determination value marking an issued payment order.
pub const COURT_ORDER: &str = "Судебный приказ";
