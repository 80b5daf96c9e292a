//! Document-transaction domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::check::CheckStatus;

/// Response-essence value confirming the document was handed over.
pub const TRANSFER_CONFIRMED: &str = "Передача подтверждена";

/// Document type of the writ of execution.
pub const EXECUTION_WRIT: &str = "Исполнительный лист";

/// Department handling enforcement of court decisions.
pub const ENFORCEMENT_DEPARTMENT: &str = "ПСИП";

/// One document transaction from the documents report.
///
/// Several records may share `(case_code, document_type, department)`;
/// only the latest one per group is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(default)]
    pub request_code: Option<String>,
    pub case_code: String,
    pub document_type: String,
    pub department: String,
    #[serde(default)]
    pub request_date: Option<NaiveDate>,
    #[serde(default)]
    pub receipt_date: Option<NaiveDate>,
    #[serde(default)]
    pub transfer_date: Option<NaiveDate>,
    /// Free text; the literal [`TRANSFER_CONFIRMED`] value means completion.
    #[serde(default)]
    pub response_essence: Option<String>,
    #[serde(default)]
    pub responsible_executor: Option<String>,
}

impl DocumentRecord {
    pub fn transfer_confirmed(&self) -> bool {
        self.response_essence.as_deref() == Some(TRANSFER_CONFIRMED)
    }
}

/// One row of the processed document-monitoring table: the authoritative
/// record of a `(case, document type, department)` group together with its
/// evaluated monitoring status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedDocument {
    pub request_code: String,
    pub case_code: String,
    pub document: String,
    pub department: String,
    #[serde(default)]
    pub response_essence: Option<String>,
    pub monitoring_status: CheckStatus,
    /// Transfer confirmed on the authoritative record.
    pub completed: bool,
}
