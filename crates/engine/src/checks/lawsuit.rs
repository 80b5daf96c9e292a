//! Lawsuit production checks.

use chrono::{Days, NaiveDate};

use shared_types::{CaseRecord, CheckId, CheckResult, CheckStatus};

use crate::calendar::WorkingCalendar;

use super::{deadline_check, CheckContext};

const CLOSED_DEADLINE_DAYS: u64 = 125;
const DECISION_DEADLINE_DAYS: u64 = 45;
const DECISION_RECEIPT_DEADLINE_DAYS: u64 = 3;
const DECISION_TRANSFER_DEADLINE_DAYS: u64 = 1;
const NEXT_HEARING_WORKING_DAYS: u32 = 3;
const HEARING_INTERVAL_WORKING_DAYS: u32 = 2;
const CONSIDERATION_DEADLINE_DAYS: u64 = 60;
const COURT_REACTION_WORKING_DAYS: u32 = 7;
const FIRST_STATUS_DEADLINE_DAYS: u64 = 14;

fn plus_days(days: u64) -> impl FnOnce(NaiveDate) -> NaiveDate {
    move |anchor| anchor + Days::new(days)
}

/// Case must close within 125 calendar days of filing.
pub fn evaluate_closed(record: &CaseRecord, today: NaiveDate) -> CheckResult {
    deadline_check(
        CheckId::Closed125Days,
        record.filing_anchor(),
        record.case_closing_date,
        plus_days(CLOSED_DEADLINE_DAYS),
        today,
    )
}

/// Court must issue its decision within 45 calendar days of accepting
/// the case for proceedings.
pub fn evaluate_decision(record: &CaseRecord, today: NaiveDate) -> CheckResult {
    deadline_check(
        CheckId::Decision45Days,
        record.decision_court_date,
        record.court_decision_date,
        plus_days(DECISION_DEADLINE_DAYS),
        today,
    )
}

/// Decision must be received within 3 calendar days of issuance.
pub fn evaluate_decision_receipt(record: &CaseRecord, today: NaiveDate) -> CheckResult {
    deadline_check(
        CheckId::DecisionReceipt3Days,
        record.court_decision_date,
        record.decision_receipt_date,
        plus_days(DECISION_RECEIPT_DEADLINE_DAYS),
        today,
    )
}

/// Decision must be transferred within 1 calendar day of issuance.
pub fn evaluate_decision_transfer(record: &CaseRecord, today: NaiveDate) -> CheckResult {
    deadline_check(
        CheckId::DecisionTransfer1Day,
        record.court_decision_date,
        record.actual_transfer_date,
        plus_days(DECISION_TRANSFER_DEADLINE_DAYS),
        today,
    )
}

/// Next hearing must be scheduled within 3 working days of the court
/// determination.
pub fn evaluate_next_hearing(record: &CaseRecord, ctx: &CheckContext<'_>) -> CheckResult {
    deadline_check(
        CheckId::NextHearing3Days,
        record.determination_date,
        record.next_hearing_date,
        |anchor| ctx.calendar.add_working_days(anchor, NEXT_HEARING_WORKING_DAYS),
        ctx.today,
    )
}

/// Interval between consecutive hearings must not exceed 2 working days.
///
/// Completion means both hearing dates are on record. With only one date
/// (or out-of-order dates) the single known date anchors a 2-working-day
/// deadline judged against today; with neither date the interval is
/// unconditionally overdue.
pub fn evaluate_hearing_interval(record: &CaseRecord, ctx: &CheckContext<'_>) -> CheckResult {
    let check = CheckId::HearingInterval2Days;
    let completed = record.previous_hearing_date.is_some() && record.next_hearing_date.is_some();

    let pending_from = |anchor: NaiveDate| {
        let deadline = ctx
            .calendar
            .add_working_days(anchor, HEARING_INTERVAL_WORKING_DAYS);
        let status = if ctx.today > deadline {
            CheckStatus::Overdue
        } else {
            CheckStatus::Timely
        };
        CheckResult::new(check, status, completed)
    };

    match (record.previous_hearing_date, record.next_hearing_date) {
        (None, None) => CheckResult::new(check, CheckStatus::Overdue, completed),
        (None, Some(next)) => pending_from(next),
        (Some(prev), None) => pending_from(prev),
        (Some(prev), Some(next)) if next < prev => pending_from(prev),
        (Some(prev), Some(next)) => {
            let between = ctx.calendar.working_days_between(prev, next);
            let status = if between <= i64::from(HEARING_INTERVAL_WORKING_DAYS) {
                CheckStatus::Timely
            } else {
                CheckStatus::Overdue
            };
            CheckResult::new(check, status, completed)
        }
    }
}

/// Case must not sit under consideration longer than 60 calendar days
/// from filing. There is no completion date for this check; it settles
/// only by leaving the stage.
pub fn evaluate_consideration(record: &CaseRecord, today: NaiveDate) -> CheckResult {
    let Some(filing) = record.filing_anchor() else {
        return CheckResult::no_data(CheckId::Consideration60Days);
    };
    let deadline = filing + Days::new(CONSIDERATION_DEADLINE_DAYS);
    let status = if today > deadline {
        CheckStatus::Overdue
    } else {
        CheckStatus::Timely
    };
    CheckResult::new(CheckId::Consideration60Days, status, false)
}

/// Court must react with a determination within 7 working days of
/// filing. A determination on record settles the check immediately.
pub fn evaluate_court_reaction(record: &CaseRecord, ctx: &CheckContext<'_>) -> CheckResult {
    if record.determination_date.is_some() {
        return CheckResult::new(CheckId::CourtReaction7Days, CheckStatus::Timely, true);
    }
    let Some(filing) = record.filing_anchor() else {
        return CheckResult::no_data(CheckId::CourtReaction7Days);
    };
    let deadline = ctx
        .calendar
        .add_working_days(filing, COURT_REACTION_WORKING_DAYS);
    let status = if ctx.today > deadline {
        CheckStatus::Overdue
    } else {
        CheckStatus::Timely
    };
    CheckResult::new(CheckId::CourtReaction7Days, status, false)
}

/// Case must leave its initial status within 14 calendar days of filing.
/// Settles only by leaving the stage, so never completed here.
pub fn evaluate_first_status_changed(record: &CaseRecord, today: NaiveDate) -> CheckResult {
    let Some(filing) = record.filing_anchor() else {
        return CheckResult::no_data(CheckId::FirstStatusChanged14Days);
    };
    let deadline = filing + Days::new(FIRST_STATUS_DEADLINE_DAYS);
    let status = if today > deadline {
        CheckStatus::Overdue
    } else {
        CheckStatus::Timely
    };
    CheckResult::new(CheckId::FirstStatusChanged14Days, status, false)
}
