//! Stage classification.
//!
//! Each production type owns an ordered table of `(predicate, stage)`
//! rules; a case gets the stage of the first predicate it satisfies.
//! Every predicate is evaluated against the original record — priority
//! short-circuit is what keeps the assignment unambiguous, not mutual
//! exclusion of the predicates themselves. Cases matching nothing land in
//! `outside_stage_filters` and are excluded from further monitoring.

use shared_types::{CaseRecord, CaseStatus, ProductionType, Stage};

/// One row of a stage-rule table.
pub struct StageRule {
    pub stage: Stage,
    pub matches: fn(&CaseRecord) -> bool,
}

fn is_exceptional(record: &CaseRecord) -> bool {
    matches!(
        record.case_status,
        CaseStatus::Reopened
            | CaseStatus::ComplaintFiled
            | CaseStatus::ErrorDuplicate
            | CaseStatus::WithdrawnByInitiator
    )
}

fn lawsuit_closed(record: &CaseRecord) -> bool {
    matches!(
        record.case_status,
        CaseStatus::ConditionallyClosed | CaseStatus::Closed
    ) || record.case_closing_date.is_some()
}

fn lawsuit_execution_document(record: &CaseRecord) -> bool {
    record.case_status == CaseStatus::CourtActInForce
        || record.actual_transfer_date.is_some()
        || record.actual_receipt_date.is_some()
}

fn lawsuit_decision_made(record: &CaseRecord) -> bool {
    record.case_status == CaseStatus::DecisionMade || record.final_court_act.is_some()
}

fn under_consideration(record: &CaseRecord) -> bool {
    record.case_status == CaseStatus::UnderConsideration
}

fn awaiting_court_response(record: &CaseRecord) -> bool {
    record.case_status == CaseStatus::AwaitingCourtResponse
}

fn preparing_documents(record: &CaseRecord) -> bool {
    record.case_status == CaseStatus::PreparationOfDocuments
}

fn order_closed(record: &CaseRecord) -> bool {
    record.case_status == CaseStatus::Closed || record.case_closing_date.is_some()
}

fn order_execution_document(record: &CaseRecord) -> bool {
    record.case_status == CaseStatus::ConditionallyClosed
        || record.actual_receipt_date.is_some()
        || record.actual_transfer_date.is_some()
}

const LAWSUIT_STAGE_RULES: &[StageRule] = &[
    StageRule {
        stage: Stage::Exceptions,
        matches: is_exceptional,
    },
    StageRule {
        stage: Stage::Closed,
        matches: lawsuit_closed,
    },
    StageRule {
        stage: Stage::ExecutionDocumentReceived,
        matches: lawsuit_execution_document,
    },
    StageRule {
        stage: Stage::DecisionMade,
        matches: lawsuit_decision_made,
    },
    StageRule {
        stage: Stage::UnderConsideration,
        matches: under_consideration,
    },
    StageRule {
        stage: Stage::CourtReaction,
        matches: awaiting_court_response,
    },
    StageRule {
        stage: Stage::FirstStatusChanged,
        matches: preparing_documents,
    },
];

const ORDER_STAGE_RULES: &[StageRule] = &[
    StageRule {
        stage: Stage::Exceptions,
        matches: is_exceptional,
    },
    StageRule {
        stage: Stage::Closed,
        matches: order_closed,
    },
    StageRule {
        stage: Stage::ExecutionDocumentReceived,
        matches: order_execution_document,
    },
    StageRule {
        stage: Stage::CourtReaction,
        matches: awaiting_court_response,
    },
    StageRule {
        stage: Stage::FirstStatusChanged,
        matches: preparing_documents,
    },
];

/// Ordered stage rules for a production type, highest priority first.
pub fn stage_rules(production: ProductionType) -> &'static [StageRule] {
    match production {
        ProductionType::Lawsuit => LAWSUIT_STAGE_RULES,
        ProductionType::Order => ORDER_STAGE_RULES,
    }
}

/// Assign the processing stage for one case. Pure, total, deterministic.
pub fn classify(record: &CaseRecord) -> Stage {
    stage_rules(record.production_type)
        .iter()
        .find(|rule| (rule.matches)(record))
        .map(|rule| rule.stage)
        .unwrap_or(Stage::OutsideStageFilters)
}
