//! Stage-check runner tests: composite shape, the exceptions stage, and
//! the execution-document join.

use engine::checks::CheckContext;
use engine::documents::{monitor_documents, DocumentSnapshot};
use engine::runner::{checks_for, run_stage_checks};
use pretty_assertions::assert_eq;
use shared_types::{
    CaseStatus, CheckStatus, ExceptionKind, ProductionType, Stage, ENFORCEMENT_DEPARTMENT,
    EXECUTION_WRIT, TRANSFER_CONFIRMED,
};

use crate::common::{date, document, lawsuit, order, weekend_calendar};

const ALL_STAGES: &[Stage] = &[
    Stage::Exceptions,
    Stage::Closed,
    Stage::ExecutionDocumentReceived,
    Stage::DecisionMade,
    Stage::UnderConsideration,
    Stage::CourtReaction,
    Stage::FirstStatusChanged,
    Stage::OutsideStageFilters,
];

#[test]
fn composite_length_matches_configured_checks() {
    let calendar = weekend_calendar();
    let snapshot = DocumentSnapshot::empty();
    let ctx = CheckContext {
        today: date(2024, 6, 1),
        calendar: &calendar,
        documents: &snapshot,
    };

    for production in [ProductionType::Lawsuit, ProductionType::Order] {
        for &stage in ALL_STAGES {
            let record = match production {
                ProductionType::Lawsuit => lawsuit("L-1", CaseStatus::UnderConsideration),
                ProductionType::Order => order("O-1", CaseStatus::AwaitingCourtResponse),
            };
            let composite = run_stage_checks(&record, stage, &ctx);
            let expected = checks_for(production, stage).len();
            assert_eq!(composite.len(), expected, "{production:?}/{stage:?}");
            // The string encodings split to the same arity.
            if expected > 0 {
                assert_eq!(composite.status_string().split(';').count(), expected);
                assert_eq!(composite.completion_string().split(';').count(), expected);
            }
        }
    }
}

#[test]
fn exceptions_stage_republishes_the_exceptional_status() {
    let calendar = weekend_calendar();
    let snapshot = DocumentSnapshot::empty();
    let ctx = CheckContext {
        today: date(2024, 6, 1),
        calendar: &calendar,
        documents: &snapshot,
    };

    let record = lawsuit("L-2", CaseStatus::Reopened);
    let composite = run_stage_checks(&record, Stage::Exceptions, &ctx);
    assert_eq!(composite.len(), 1);
    let result = composite.get(0).unwrap();
    assert_eq!(
        result.status,
        CheckStatus::Exception(ExceptionKind::Reopened)
    );
    assert!(result.completed);
    assert_eq!(composite.status_string(), "reopened");
    assert_eq!(composite.completion_string(), "true");
}

#[test]
fn outside_stage_filters_yields_empty_composite() {
    let calendar = weekend_calendar();
    let snapshot = DocumentSnapshot::empty();
    let ctx = CheckContext {
        today: date(2024, 6, 1),
        calendar: &calendar,
        documents: &snapshot,
    };

    let record = lawsuit("L-3", CaseStatus::Unknown);
    let composite = run_stage_checks(&record, Stage::OutsideStageFilters, &ctx);
    assert!(composite.is_empty());
    assert_eq!(composite.status_string(), "no_data");
    assert_eq!(composite.completion_string(), "false");
}

#[test]
fn execution_document_check_joins_the_snapshot() {
    let calendar = weekend_calendar();

    let mut writ = document("L-4", EXECUTION_WRIT, ENFORCEMENT_DEPARTMENT);
    writ.request_date = Some(date(2024, 1, 1));
    writ.transfer_date = Some(date(2024, 1, 10));
    writ.response_essence = Some(TRANSFER_CONFIRMED.to_string());
    let snapshot = DocumentSnapshot::new(monitor_documents(&[writ], date(2024, 2, 1)));

    let ctx = CheckContext {
        today: date(2024, 2, 1),
        calendar: &calendar,
        documents: &snapshot,
    };

    let mut record = lawsuit("L-4", CaseStatus::CourtActInForce);
    record.actual_receipt_date = Some(date(2024, 1, 10));
    let composite = run_stage_checks(&record, Stage::ExecutionDocumentReceived, &ctx);
    let result = composite.get(0).unwrap();
    assert_eq!(result.status, CheckStatus::Timely);
    assert!(result.completed);

    // Case with no matching document row degrades.
    let other = lawsuit("L-5", CaseStatus::CourtActInForce);
    let composite = run_stage_checks(&other, Stage::ExecutionDocumentReceived, &ctx);
    assert_eq!(composite.get(0).unwrap().status, CheckStatus::NoData);
}

#[test]
fn evaluation_is_idempotent() {
    let calendar = weekend_calendar();
    let snapshot = DocumentSnapshot::empty();
    let ctx = CheckContext {
        today: date(2024, 6, 10),
        calendar: &calendar,
        documents: &snapshot,
    };

    let mut record = lawsuit("L-6", CaseStatus::UnderConsideration);
    record.filing_date = Some(date(2024, 1, 1));

    let first = run_stage_checks(&record, Stage::UnderConsideration, &ctx);
    let second = run_stage_checks(&record, Stage::UnderConsideration, &ctx);
    assert_eq!(first, second);
}

#[test]
fn order_stage_tables_skip_lawsuit_only_stages() {
    assert!(checks_for(ProductionType::Order, Stage::DecisionMade).is_empty());
    assert!(checks_for(ProductionType::Order, Stage::UnderConsideration).is_empty());
    assert_eq!(
        checks_for(ProductionType::Lawsuit, Stage::UnderConsideration).len(),
        3
    );
}
