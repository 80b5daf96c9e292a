//! Document-transfer monitoring.
//!
//! Document records arrive as raw transactions; several may share one
//! `(case, document type, department)` group. Group resolution picks the
//! authoritative record per group, the 14-day request check produces the
//! processed monitoring table, and the turnaround check judges the
//! 2-working-day handover window that feeds the report's
//! `documents_status` column.

use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

use shared_types::{CheckStatus, DocumentRecord, ProcessedDocument};

use crate::calendar::WorkingCalendar;

/// Calendar days a requested document may stay unconfirmed.
const REQUEST_DEADLINE_DAYS: i64 = 14;

/// Working days allowed between receipt and transfer.
const TURNAROUND_WORKING_DAYS: i64 = 2;

/// Calendar-day window before the turnaround deadline that flags
/// `upcoming_deadline` instead of `timely`.
const UPCOMING_WINDOW_DAYS: i64 = 14;

/// Grouping key for document transactions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentGroupKey {
    pub case_code: String,
    pub document_type: String,
    pub department: String,
}

impl DocumentGroupKey {
    pub fn of(record: &DocumentRecord) -> Self {
        Self {
            case_code: record.case_code.clone(),
            document_type: record.document_type.clone(),
            department: record.department.clone(),
        }
    }
}

/// Select the authoritative record of a group: maximum non-null transfer
/// date, else maximum non-null receipt date, else the first record seen.
pub fn select_latest<'a>(records: &[&'a DocumentRecord]) -> Option<&'a DocumentRecord> {
    if records.is_empty() {
        return None;
    }
    let latest_transfer = records
        .iter()
        .copied()
        .filter(|r| r.transfer_date.is_some())
        .max_by_key(|r| r.transfer_date);
    if let Some(found) = latest_transfer {
        return Some(found);
    }
    let latest_receipt = records
        .iter()
        .copied()
        .filter(|r| r.receipt_date.is_some())
        .max_by_key(|r| r.receipt_date);
    Some(latest_receipt.unwrap_or(records[0]))
}

fn group_by_key<'a>(
    documents: &'a [DocumentRecord],
) -> HashMap<DocumentGroupKey, Vec<&'a DocumentRecord>> {
    let mut groups: HashMap<DocumentGroupKey, Vec<&DocumentRecord>> = HashMap::new();
    for record in documents {
        groups
            .entry(DocumentGroupKey::of(record))
            .or_default()
            .push(record);
    }
    groups
}

/// 14-day request check on one record: past the deadline a document is
/// timely only once its transfer has been confirmed.
pub fn evaluate_document_request(record: &DocumentRecord, today: NaiveDate) -> CheckStatus {
    let Some(request_date) = record.request_date else {
        return CheckStatus::NoData;
    };
    let deadline = request_date + Duration::days(REQUEST_DEADLINE_DAYS);
    if today > deadline && !record.transfer_confirmed() {
        CheckStatus::Overdue
    } else {
        CheckStatus::Timely
    }
}

/// Build the processed document-monitoring table: one row per group,
/// evaluated on the group's authoritative record.
pub fn monitor_documents(documents: &[DocumentRecord], today: NaiveDate) -> Vec<ProcessedDocument> {
    let mut rows: Vec<ProcessedDocument> = group_by_key(documents)
        .into_values()
        .filter_map(|group| {
            let latest = select_latest(&group)?;
            Some(ProcessedDocument {
                request_code: latest
                    .request_code
                    .clone()
                    .unwrap_or_else(|| "unknown".to_string()),
                case_code: latest.case_code.clone(),
                document: latest.document_type.clone(),
                department: latest.department.clone(),
                response_essence: latest.response_essence.clone(),
                monitoring_status: evaluate_document_request(latest, today),
                completed: latest.transfer_confirmed(),
            })
        })
        .collect();
    // HashMap iteration order is arbitrary; keep the output stable.
    rows.sort_by(|a, b| {
        (&a.case_code, &a.document, &a.department).cmp(&(
            &b.case_code,
            &b.document,
            &b.department,
        ))
    });
    rows
}

/// Turnaround status of one group.
///
/// Groups with a transfer are judged on working days between receipt and
/// transfer of the latest transferred record. Pending groups go overdue
/// once more than two working days have passed since receipt; inside the
/// window, `upcoming_deadline` marks deadlines at most fourteen calendar
/// days away.
fn turnaround_status_for_group(
    group: &[&DocumentRecord],
    calendar: &dyn WorkingCalendar,
    today: NaiveDate,
) -> CheckStatus {
    let transferred: Vec<&DocumentRecord> = group
        .iter()
        .copied()
        .filter(|r| r.transfer_date.is_some())
        .collect();

    if let Some(latest) = transferred
        .iter()
        .max_by_key(|r| r.transfer_date)
        .copied()
    {
        let (Some(receipt), Some(transfer)) = (latest.receipt_date, latest.transfer_date) else {
            return CheckStatus::NoData;
        };
        return if calendar.working_days_between(receipt, transfer) <= TURNAROUND_WORKING_DAYS {
            CheckStatus::Timely
        } else {
            CheckStatus::Overdue
        };
    }

    let Some(latest) = group
        .iter()
        .copied()
        .filter(|r| r.receipt_date.is_some())
        .max_by_key(|r| r.receipt_date)
    else {
        return CheckStatus::NoData;
    };
    let Some(receipt) = latest.receipt_date else {
        return CheckStatus::NoData;
    };

    if calendar.working_days_between(receipt, today) > TURNAROUND_WORKING_DAYS {
        return CheckStatus::Overdue;
    }
    let deadline = calendar.add_working_days(receipt, TURNAROUND_WORKING_DAYS as u32);
    if today < deadline {
        let days_until_deadline = (deadline - today).num_days();
        if days_until_deadline <= UPCOMING_WINDOW_DAYS {
            CheckStatus::UpcomingDeadline
        } else {
            CheckStatus::Timely
        }
    } else {
        CheckStatus::Overdue
    }
}

/// Turnaround statuses position-aligned with the input slice. Records
/// without a receipt date are excluded from grouping and stay `no_data`.
pub fn turnaround_statuses(
    documents: &[DocumentRecord],
    calendar: &dyn WorkingCalendar,
    today: NaiveDate,
) -> Vec<CheckStatus> {
    let mut statuses = vec![CheckStatus::NoData; documents.len()];

    let mut groups: HashMap<DocumentGroupKey, Vec<usize>> = HashMap::new();
    for (idx, record) in documents.iter().enumerate() {
        if record.receipt_date.is_none() {
            continue;
        }
        groups
            .entry(DocumentGroupKey::of(record))
            .or_default()
            .push(idx);
    }

    for indices in groups.values() {
        let group: Vec<&DocumentRecord> = indices.iter().map(|&i| &documents[i]).collect();
        let status = turnaround_status_for_group(&group, calendar, today);
        for &idx in indices {
            statuses[idx] = status.clone();
        }
    }
    statuses
}

/// Read-only snapshot of the processed document table, taken at the start
/// of a batch run. The execution-document check joins against it by
/// `(case, document type, department)`.
#[derive(Debug, Clone, Default)]
pub struct DocumentSnapshot {
    by_key: HashMap<DocumentGroupKey, ProcessedDocument>,
}

impl DocumentSnapshot {
    pub fn new(rows: Vec<ProcessedDocument>) -> Self {
        let mut by_key = HashMap::new();
        for row in rows {
            let key = DocumentGroupKey {
                case_code: row.case_code.clone(),
                document_type: row.document.clone(),
                department: row.department.clone(),
            };
            // First row per key wins, as in the source join.
            by_key.entry(key).or_insert(row);
        }
        Self { by_key }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(
        &self,
        case_code: &str,
        document_type: &str,
        department: &str,
    ) -> Option<&ProcessedDocument> {
        self.by_key.get(&DocumentGroupKey {
            case_code: case_code.to_string(),
            document_type: document_type.to_string(),
            department: department.to_string(),
        })
    }
}
