//! Stage-to-check wiring and composite evaluation.
//!
//! Each (production, stage) pair owns a fixed ordered list of checks.
//! Running a stage evaluates its checks in order and collects the
//! results into a [`CompositeStatus`], so the composite always has
//! exactly as many entries as the stage has checks. A stage outside the
//! stage filters has no checks and yields an empty composite.

use shared_types::{CaseRecord, CheckId, CheckResult, CompositeStatus, ProductionType, Stage};
use tracing::warn;

use crate::checks::{self, lawsuit, order, CheckContext};

const LAWSUIT_EXCEPTIONS: &[CheckId] = &[CheckId::ExceptionStatus];
const LAWSUIT_CLOSED: &[CheckId] = &[CheckId::Closed125Days];
const LAWSUIT_EXECUTION_DOCUMENT: &[CheckId] = &[CheckId::ExecutionDocumentReceivedLawsuit];
const LAWSUIT_DECISION_MADE: &[CheckId] = &[
    CheckId::Decision45Days,
    CheckId::DecisionReceipt3Days,
    CheckId::DecisionTransfer1Day,
];
const LAWSUIT_UNDER_CONSIDERATION: &[CheckId] = &[
    CheckId::NextHearing3Days,
    CheckId::HearingInterval2Days,
    CheckId::Consideration60Days,
];
const LAWSUIT_COURT_REACTION: &[CheckId] = &[CheckId::CourtReaction7Days];
const LAWSUIT_FIRST_STATUS: &[CheckId] = &[CheckId::FirstStatusChanged14Days];

const ORDER_EXCEPTIONS: &[CheckId] = &[CheckId::ExceptionStatus];
const ORDER_CLOSED: &[CheckId] = &[CheckId::Closed90Days];
const ORDER_EXECUTION_DOCUMENT: &[CheckId] = &[CheckId::ExecutionDocumentReceivedOrder];
const ORDER_COURT_REACTION: &[CheckId] = &[CheckId::CourtReaction60Days];
const ORDER_FIRST_STATUS: &[CheckId] = &[CheckId::FirstStatus14Days];

/// Ordered checks for a stage of the given production type.
pub fn checks_for(production: ProductionType, stage: Stage) -> &'static [CheckId] {
    match production {
        ProductionType::Lawsuit => match stage {
            Stage::Exceptions => LAWSUIT_EXCEPTIONS,
            Stage::Closed => LAWSUIT_CLOSED,
            Stage::ExecutionDocumentReceived => LAWSUIT_EXECUTION_DOCUMENT,
            Stage::DecisionMade => LAWSUIT_DECISION_MADE,
            Stage::UnderConsideration => LAWSUIT_UNDER_CONSIDERATION,
            Stage::CourtReaction => LAWSUIT_COURT_REACTION,
            Stage::FirstStatusChanged => LAWSUIT_FIRST_STATUS,
            Stage::OutsideStageFilters => &[],
        },
        ProductionType::Order => match stage {
            Stage::Exceptions => ORDER_EXCEPTIONS,
            Stage::Closed => ORDER_CLOSED,
            Stage::ExecutionDocumentReceived => ORDER_EXECUTION_DOCUMENT,
            Stage::CourtReaction => ORDER_COURT_REACTION,
            Stage::FirstStatusChanged => ORDER_FIRST_STATUS,
            // Order production has no decision or consideration stage.
            Stage::DecisionMade | Stage::UnderConsideration | Stage::OutsideStageFilters => &[],
        },
    }
}

fn evaluate(check: CheckId, record: &CaseRecord, ctx: &CheckContext<'_>) -> CheckResult {
    match check {
        CheckId::ExceptionStatus => checks::evaluate_exception(record),
        CheckId::Closed125Days => lawsuit::evaluate_closed(record, ctx.today),
        CheckId::ExecutionDocumentReceivedLawsuit | CheckId::ExecutionDocumentReceivedOrder => {
            checks::evaluate_execution_document(check, record, ctx.documents)
        }
        CheckId::Decision45Days => lawsuit::evaluate_decision(record, ctx.today),
        CheckId::DecisionReceipt3Days => lawsuit::evaluate_decision_receipt(record, ctx.today),
        CheckId::DecisionTransfer1Day => lawsuit::evaluate_decision_transfer(record, ctx.today),
        CheckId::NextHearing3Days => lawsuit::evaluate_next_hearing(record, ctx),
        CheckId::HearingInterval2Days => lawsuit::evaluate_hearing_interval(record, ctx),
        CheckId::Consideration60Days => lawsuit::evaluate_consideration(record, ctx.today),
        CheckId::CourtReaction7Days => lawsuit::evaluate_court_reaction(record, ctx),
        CheckId::FirstStatusChanged14Days => {
            lawsuit::evaluate_first_status_changed(record, ctx.today)
        }
        CheckId::Closed90Days => order::evaluate_closed(record, ctx.today),
        CheckId::CourtReaction60Days => order::evaluate_court_reaction(record, ctx.today),
        CheckId::FirstStatus14Days => order::evaluate_first_status(record, ctx.today),
        // Document-table check; no stage ever lists it against a case.
        CheckId::DocumentRequest14Days => CheckResult::no_data(check),
    }
}

/// Runs every check of the stage against the record, in stage order.
pub fn run_stage_checks(
    record: &CaseRecord,
    stage: Stage,
    ctx: &CheckContext<'_>,
) -> CompositeStatus {
    let checks = checks_for(record.production_type, stage);
    if checks.is_empty() && stage != Stage::OutsideStageFilters {
        warn!(
            case_code = %record.case_code,
            production = record.production_type.as_str(),
            stage = stage.as_str(),
            "stage has no checks for this production type"
        );
    }
    let results = checks
        .iter()
        .map(|&check| evaluate(check, record, ctx))
        .collect();
    CompositeStatus::new(results)
}
