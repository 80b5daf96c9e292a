//! Lawsuit deadline-check tests.

use engine::calendar::BusinessCalendar;
use engine::checks::{lawsuit, CheckContext};
use engine::documents::DocumentSnapshot;
use pretty_assertions::assert_eq;
use shared_types::{CaseStatus, CheckStatus};

use crate::common::{date, lawsuit as make_case, weekend_calendar};

#[test]
fn closed_boundary_day_125_is_timely() {
    let mut record = make_case("L-1", CaseStatus::Closed);
    record.filing_date = Some(date(2024, 1, 1));

    // 2024-05-05 is exactly filing + 125 days.
    let on_deadline = lawsuit::evaluate_closed(&record, date(2024, 5, 5));
    assert_eq!(on_deadline.status, CheckStatus::Timely);
    assert!(!on_deadline.completed);

    let past_deadline = lawsuit::evaluate_closed(&record, date(2024, 5, 6));
    assert_eq!(past_deadline.status, CheckStatus::Overdue);
    assert!(!past_deadline.completed);
}

#[test]
fn closed_with_closing_date_is_judged_and_completed() {
    let mut record = make_case("L-2", CaseStatus::Closed);
    record.filing_date = Some(date(2024, 1, 1));
    record.case_closing_date = Some(date(2024, 5, 5));

    let result = lawsuit::evaluate_closed(&record, date(2024, 12, 1));
    assert_eq!(result.status, CheckStatus::Timely);
    assert!(result.completed);

    record.case_closing_date = Some(date(2024, 5, 6));
    let result = lawsuit::evaluate_closed(&record, date(2024, 12, 1));
    assert_eq!(result.status, CheckStatus::Overdue);
    assert!(result.completed);
}

#[test]
fn closed_without_filing_anchor_degrades_to_no_data() {
    let record = make_case("L-3", CaseStatus::Closed);
    let result = lawsuit::evaluate_closed(&record, date(2024, 5, 5));
    assert_eq!(result.status, CheckStatus::NoData);
    assert!(!result.completed);
}

#[test]
fn last_request_date_backs_up_missing_filing_date() {
    let mut record = make_case("L-4", CaseStatus::Closed);
    record.last_request_date = Some(date(2024, 1, 1));
    let result = lawsuit::evaluate_closed(&record, date(2024, 5, 6));
    assert_eq!(result.status, CheckStatus::Overdue);
}

#[test]
fn decision_trio_uses_distinct_anchors() {
    let mut record = make_case("L-5", CaseStatus::DecisionMade);
    record.decision_court_date = Some(date(2024, 1, 1));
    record.court_decision_date = Some(date(2024, 2, 10));
    record.decision_receipt_date = Some(date(2024, 2, 12));
    record.actual_transfer_date = Some(date(2024, 2, 14));
    let today = date(2024, 3, 1);

    // Decision rendered 40 days after acceptance: inside 45 days.
    let decision = lawsuit::evaluate_decision(&record, today);
    assert_eq!(decision.status, CheckStatus::Timely);
    assert!(decision.completed);

    // Received 2 days after rendering: inside 3 days.
    let receipt = lawsuit::evaluate_decision_receipt(&record, today);
    assert_eq!(receipt.status, CheckStatus::Timely);
    assert!(receipt.completed);

    // Transferred 4 days after rendering: past the 1-day limit.
    let transfer = lawsuit::evaluate_decision_transfer(&record, today);
    assert_eq!(transfer.status, CheckStatus::Overdue);
    assert!(transfer.completed);
}

#[test]
fn decision_pending_past_deadline_is_overdue() {
    let mut record = make_case("L-6", CaseStatus::DecisionMade);
    record.decision_court_date = Some(date(2024, 1, 1));
    let result = lawsuit::evaluate_decision(&record, date(2024, 2, 16));
    assert_eq!(result.status, CheckStatus::Overdue);
    assert!(!result.completed);
}

fn ctx<'a>(
    calendar: &'a BusinessCalendar,
    snapshot: &'a DocumentSnapshot,
    today: chrono::NaiveDate,
) -> CheckContext<'a> {
    CheckContext {
        today,
        calendar,
        documents: snapshot,
    }
}

#[test]
fn next_hearing_deadline_counts_working_days() {
    let calendar = weekend_calendar();
    let snapshot = DocumentSnapshot::empty();

    let mut record = make_case("L-7", CaseStatus::UnderConsideration);
    // Thursday; +3 working days = Tuesday 2024-01-09.
    record.determination_date = Some(date(2024, 1, 4));
    record.next_hearing_date = Some(date(2024, 1, 9));

    let result = lawsuit::evaluate_next_hearing(&record, &ctx(&calendar, &snapshot, date(2024, 2, 1)));
    assert_eq!(result.status, CheckStatus::Timely);
    assert!(result.completed);

    record.next_hearing_date = Some(date(2024, 1, 10));
    let result = lawsuit::evaluate_next_hearing(&record, &ctx(&calendar, &snapshot, date(2024, 2, 1)));
    assert_eq!(result.status, CheckStatus::Overdue);
}

#[test]
fn hearing_interval_weekend_gap_is_timely() {
    let calendar = weekend_calendar();
    let snapshot = DocumentSnapshot::empty();

    let mut record = make_case("L-8", CaseStatus::UnderConsideration);
    // Friday to Tuesday: 4 calendar days but 2 working days.
    record.previous_hearing_date = Some(date(2024, 1, 5));
    record.next_hearing_date = Some(date(2024, 1, 9));

    let result =
        lawsuit::evaluate_hearing_interval(&record, &ctx(&calendar, &snapshot, date(2024, 2, 1)));
    assert_eq!(result.status, CheckStatus::Timely);
    assert!(result.completed);
}

#[test]
fn hearing_interval_holiday_shifts_the_count() {
    // Same literal gap, but the Monday in between is a public holiday,
    // so Friday -> Wednesday is still only 2 working days.
    let calendar = BusinessCalendar::new([date(2024, 1, 8)], []);
    let snapshot = DocumentSnapshot::empty();

    let mut record = make_case("L-9", CaseStatus::UnderConsideration);
    record.previous_hearing_date = Some(date(2024, 1, 5));
    record.next_hearing_date = Some(date(2024, 1, 10));

    let result =
        lawsuit::evaluate_hearing_interval(&record, &ctx(&calendar, &snapshot, date(2024, 2, 1)));
    assert_eq!(result.status, CheckStatus::Timely);
}

#[test]
fn hearing_interval_without_any_date_is_overdue() {
    let calendar = weekend_calendar();
    let snapshot = DocumentSnapshot::empty();
    let record = make_case("L-10", CaseStatus::UnderConsideration);

    let result =
        lawsuit::evaluate_hearing_interval(&record, &ctx(&calendar, &snapshot, date(2024, 2, 1)));
    assert_eq!(result.status, CheckStatus::Overdue);
    assert!(!result.completed);
}

#[test]
fn hearing_interval_out_of_order_falls_back_to_single_anchor() {
    let calendar = weekend_calendar();
    let snapshot = DocumentSnapshot::empty();

    let mut record = make_case("L-11", CaseStatus::UnderConsideration);
    // next < previous: judged as if only the previous date existed.
    record.previous_hearing_date = Some(date(2024, 1, 10));
    record.next_hearing_date = Some(date(2024, 1, 8));

    // Inside previous + 2 working days.
    let result =
        lawsuit::evaluate_hearing_interval(&record, &ctx(&calendar, &snapshot, date(2024, 1, 11)));
    assert_eq!(result.status, CheckStatus::Timely);
    assert!(result.completed);

    // Past it.
    let result =
        lawsuit::evaluate_hearing_interval(&record, &ctx(&calendar, &snapshot, date(2024, 1, 15)));
    assert_eq!(result.status, CheckStatus::Overdue);
}

#[test]
fn consideration_check_never_completes() {
    let mut record = make_case("L-12", CaseStatus::UnderConsideration);
    record.filing_date = Some(date(2024, 1, 1));

    let inside = lawsuit::evaluate_consideration(&record, date(2024, 2, 1));
    assert_eq!(inside.status, CheckStatus::Timely);
    assert!(!inside.completed);

    let outside = lawsuit::evaluate_consideration(&record, date(2024, 6, 10));
    assert_eq!(outside.status, CheckStatus::Overdue);
    assert!(!outside.completed);
}

#[test]
fn court_reaction_settles_once_determination_exists() {
    let calendar = weekend_calendar();
    let snapshot = DocumentSnapshot::empty();

    let mut record = make_case("L-13", CaseStatus::AwaitingCourtResponse);
    record.filing_date = Some(date(2024, 1, 1));
    record.determination_date = Some(date(2024, 3, 1));

    // Even long past filing + 7 working days the check is timely.
    let result =
        lawsuit::evaluate_court_reaction(&record, &ctx(&calendar, &snapshot, date(2024, 6, 1)));
    assert_eq!(result.status, CheckStatus::Timely);
    assert!(result.completed);

    record.determination_date = None;
    let result =
        lawsuit::evaluate_court_reaction(&record, &ctx(&calendar, &snapshot, date(2024, 6, 1)));
    assert_eq!(result.status, CheckStatus::Overdue);
    assert!(!result.completed);
}

#[test]
fn first_status_change_deadline_is_14_calendar_days() {
    let mut record = make_case("L-14", CaseStatus::PreparationOfDocuments);
    record.filing_date = Some(date(2024, 1, 1));

    let inside = lawsuit::evaluate_first_status_changed(&record, date(2024, 1, 15));
    assert_eq!(inside.status, CheckStatus::Timely);
    assert!(!inside.completed);

    let outside = lawsuit::evaluate_first_status_changed(&record, date(2024, 1, 16));
    assert_eq!(outside.status, CheckStatus::Overdue);
}
