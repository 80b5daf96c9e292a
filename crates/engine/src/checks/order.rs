//! Court-order production checks.

use chrono::{Days, NaiveDate};

use shared_types::{CaseRecord, CaseStatus, CheckId, CheckResult, CheckStatus, COURT_ORDER};

use super::deadline_check;

const CLOSED_DEADLINE_DAYS: u64 = 90;
const COURT_REACTION_DEADLINE_DAYS: u64 = 60;
const FIRST_STATUS_DEADLINE_DAYS: u64 = 14;

/// Case must close within 90 calendar days of filing.
pub fn evaluate_closed(record: &CaseRecord, today: NaiveDate) -> CheckResult {
    deadline_check(
        CheckId::Closed90Days,
        record.filing_anchor(),
        record.case_closing_date,
        |anchor| anchor + Days::new(CLOSED_DEADLINE_DAYS),
        today,
    )
}

/// Full court reaction must land within 60 calendar days of filing.
///
/// Completion is the conjunction of four facts: the determination is a
/// court order, both writ dates (receipt and transfer) are recorded, and
/// the case sits in conditionally-closed status. Before the deadline the
/// check is always timely; after it, only a fully completed reaction is.
pub fn evaluate_court_reaction(record: &CaseRecord, today: NaiveDate) -> CheckResult {
    let Some(filing) = record.filing_anchor() else {
        return CheckResult::no_data(CheckId::CourtReaction60Days);
    };
    let deadline = filing + Days::new(COURT_REACTION_DEADLINE_DAYS);

    let has_court_order = record.court_determination.as_deref() == Some(COURT_ORDER);
    let completed = has_court_order
        && record.actual_receipt_date.is_some()
        && record.actual_transfer_date.is_some()
        && record.case_status == CaseStatus::ConditionallyClosed;

    let status = if today > deadline && !completed {
        CheckStatus::Overdue
    } else {
        CheckStatus::Timely
    };
    CheckResult::new(CheckId::CourtReaction60Days, status, completed)
}

/// Initial status must change within 14 calendar days of filing.
///
/// An already-awaiting-response case is timely regardless of the
/// deadline; only a case still preparing documents past the deadline is
/// overdue. The check stays uncompleted while the case is on this stage.
pub fn evaluate_first_status(record: &CaseRecord, today: NaiveDate) -> CheckResult {
    let Some(filing) = record.filing_anchor() else {
        return CheckResult::no_data(CheckId::FirstStatus14Days);
    };
    let deadline = filing + Days::new(FIRST_STATUS_DEADLINE_DAYS);

    let status = match record.case_status {
        CaseStatus::AwaitingCourtResponse => CheckStatus::Timely,
        CaseStatus::PreparationOfDocuments if today > deadline => CheckStatus::Overdue,
        _ => CheckStatus::Timely,
    };
    CheckResult::new(CheckId::FirstStatus14Days, status, false)
}
