//! Stage classification tests: priority order, totality, and the
//! production-specific rule tables.

use engine::classifier::classify;
use pretty_assertions::assert_eq;
use shared_types::{CaseStatus, Stage};

use crate::common::{date, lawsuit, order};

#[test]
fn exception_beats_every_other_filter() {
    // Reopened with a closing date set would also match the closed filter.
    let mut record = lawsuit("L-1", CaseStatus::Reopened);
    record.case_closing_date = Some(date(2024, 3, 1));
    assert_eq!(classify(&record), Stage::Exceptions);
}

#[test]
fn all_exceptional_statuses_classify_as_exceptions() {
    for status in [
        CaseStatus::Reopened,
        CaseStatus::ComplaintFiled,
        CaseStatus::ErrorDuplicate,
        CaseStatus::WithdrawnByInitiator,
    ] {
        assert_eq!(classify(&lawsuit("L-1", status)), Stage::Exceptions);
        assert_eq!(classify(&order("O-1", status)), Stage::Exceptions);
    }
}

#[test]
fn lawsuit_closing_date_alone_classifies_as_closed() {
    let mut record = lawsuit("L-2", CaseStatus::UnderConsideration);
    record.case_closing_date = Some(date(2024, 2, 1));
    assert_eq!(classify(&record), Stage::Closed);
}

#[test]
fn lawsuit_execution_document_from_transfer_date() {
    let mut record = lawsuit("L-3", CaseStatus::DecisionMade);
    record.actual_transfer_date = Some(date(2024, 2, 1));
    assert_eq!(classify(&record), Stage::ExecutionDocumentReceived);
}

#[test]
fn lawsuit_status_driven_stages() {
    assert_eq!(
        classify(&lawsuit("L-4", CaseStatus::DecisionMade)),
        Stage::DecisionMade
    );
    assert_eq!(
        classify(&lawsuit("L-5", CaseStatus::UnderConsideration)),
        Stage::UnderConsideration
    );
    assert_eq!(
        classify(&lawsuit("L-6", CaseStatus::AwaitingCourtResponse)),
        Stage::CourtReaction
    );
    assert_eq!(
        classify(&lawsuit("L-7", CaseStatus::PreparationOfDocuments)),
        Stage::FirstStatusChanged
    );
}

#[test]
fn lawsuit_final_court_act_classifies_as_decision_made() {
    let mut record = lawsuit("L-8", CaseStatus::Unknown);
    record.final_court_act = Some("Иск удовлетворен".to_string());
    assert_eq!(classify(&record), Stage::DecisionMade);
}

#[test]
fn order_conditionally_closed_is_execution_document_not_closed() {
    // For orders the conditionally-closed status marks the writ phase;
    // only a real closing classifies as closed.
    assert_eq!(
        classify(&order("O-2", CaseStatus::ConditionallyClosed)),
        Stage::ExecutionDocumentReceived
    );
    assert_eq!(classify(&order("O-3", CaseStatus::Closed)), Stage::Closed);
}

#[test]
fn order_has_no_consideration_or_decision_stage() {
    // Statuses that drive those lawsuit stages fall through for orders.
    assert_eq!(
        classify(&order("O-4", CaseStatus::UnderConsideration)),
        Stage::OutsideStageFilters
    );
    assert_eq!(
        classify(&order("O-5", CaseStatus::DecisionMade)),
        Stage::OutsideStageFilters
    );
}

#[test]
fn unmatched_case_lands_outside_stage_filters() {
    assert_eq!(
        classify(&lawsuit("L-9", CaseStatus::Unknown)),
        Stage::OutsideStageFilters
    );
}

#[test]
fn classification_is_idempotent() {
    let record = lawsuit("L-10", CaseStatus::UnderConsideration);
    assert_eq!(classify(&record), classify(&record));
}
