//! Deadline-check evaluators.
//!
//! Nearly every check shares one shape: resolve an anchor date, derive a
//! deadline from it, then judge either the completion date (action taken)
//! or today (action pending) against that deadline. Only the anchor
//! field, completion field, offset, and day unit differ per check —
//! [`deadline_check`] carries that shape once. The deviating checks
//! (hearing interval, the order court-reaction AND-check, the
//! execution-document join) live next to their production family.

pub mod lawsuit;
pub mod order;

use chrono::NaiveDate;

use shared_types::{
    CaseRecord, CheckId, CheckResult, CheckStatus, ExceptionKind, CaseStatus,
    ENFORCEMENT_DEPARTMENT, EXECUTION_WRIT,
};

use crate::calendar::WorkingCalendar;
use crate::documents::DocumentSnapshot;

/// Generic anchor → deadline → compare evaluation.
///
/// Missing anchor degrades to `no_data`. With a completion date the check
/// is completed and judged against the deadline; without one, today
/// decides whether the pending action is still on time.
pub(crate) fn deadline_check(
    check: CheckId,
    anchor: Option<NaiveDate>,
    completion: Option<NaiveDate>,
    deadline_from: impl FnOnce(NaiveDate) -> NaiveDate,
    today: NaiveDate,
) -> CheckResult {
    let Some(anchor) = anchor else {
        return CheckResult::no_data(check);
    };
    let deadline = deadline_from(anchor);
    match completion {
        Some(done) => CheckResult::new(
            check,
            if done <= deadline {
                CheckStatus::Timely
            } else {
                CheckStatus::Overdue
            },
            true,
        ),
        None => CheckResult::new(
            check,
            if today > deadline {
                CheckStatus::Overdue
            } else {
                CheckStatus::Timely
            },
            false,
        ),
    }
}

/// Exceptions stage: republish the exceptional status as the check
/// status. Exceptions are terminal and require no action, so the check
/// always counts as completed.
pub fn evaluate_exception(record: &CaseRecord) -> CheckResult {
    let status = match record.case_status {
        CaseStatus::Reopened => CheckStatus::Exception(ExceptionKind::Reopened),
        CaseStatus::ComplaintFiled => CheckStatus::Exception(ExceptionKind::ComplaintFiled),
        CaseStatus::ErrorDuplicate => CheckStatus::Exception(ExceptionKind::ErrorDuplicate),
        CaseStatus::WithdrawnByInitiator => {
            CheckStatus::Exception(ExceptionKind::WithdrawnByInitiator)
        }
        _ => CheckStatus::NoData,
    };
    CheckResult::new(CheckId::ExceptionStatus, status, true)
}

/// Execution-document check: a join, not a computation. Looks up the
/// authoritative writ-of-execution row for the case in the processed
/// document snapshot and republishes its monitoring status; completion is
/// the confirmed-transfer flag. A missing or stale snapshot yields
/// `no_data`, which is an acceptable degraded result.
pub fn evaluate_execution_document(
    check: CheckId,
    record: &CaseRecord,
    documents: &DocumentSnapshot,
) -> CheckResult {
    match documents.get(&record.case_code, EXECUTION_WRIT, ENFORCEMENT_DEPARTMENT) {
        Some(doc) => CheckResult::new(check, doc.monitoring_status.clone(), doc.completed),
        None => CheckResult::no_data(check),
    }
}

/// Shared context handed to every evaluator during a run.
pub struct CheckContext<'a> {
    pub today: NaiveDate,
    pub calendar: &'a dyn WorkingCalendar,
    pub documents: &'a DocumentSnapshot,
}
