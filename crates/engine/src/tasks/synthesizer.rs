//! Turns failed checks into work items.
//!
//! Synthesis walks the mapping table for each monitored case (or
//! processed document), evaluates every registered trigger, and emits
//! one task per firing spec. Task codes come from an explicit counter
//! owned by the batch, reset at the start of each run; they are unique
//! within a run and nothing more.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tracing::warn;

use shared_types::{
    CaseRecord, CompositeStatus, DocumentRecord, MonitoredCase, ProcessedDocument, ProductionType,
    Stage, Task, TaskDomain, TaskSource, TaskSpec, TaskTrigger, UNKNOWN_EXECUTOR,
};

use super::mapping::{needs_delivery_confirmation, EnrichedCase, TaskMappingTable};

/// Monotonic task-code source for one batch run.
///
/// Atomic so row-parallel synthesis stays safe; only uniqueness of the
/// produced codes is meaningful, not their ordering across cases.
#[derive(Debug)]
pub struct TaskCodeGenerator {
    counter: AtomicU64,
}

impl TaskCodeGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }

    pub fn next_code(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("TASK_{n:07}")
    }
}

impl Default for TaskCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn domain_of(production: ProductionType) -> TaskDomain {
    match production {
        ProductionType::Lawsuit => TaskDomain::Lawsuit,
        ProductionType::Order => TaskDomain::Order,
    }
}

fn trigger_fires(
    spec: &TaskSpec,
    trigger: &TaskTrigger,
    composite: &CompositeStatus,
    record: &CaseRecord,
    enriched: &EnrichedCase,
) -> bool {
    match trigger {
        TaskTrigger::CheckIndex {
            index,
            completed,
            status,
        } => composite
            .get(*index)
            .is_some_and(|r| r.completed == *completed && r.status.matches(status)),
        TaskTrigger::ColumnEquals { column, value } => {
            enriched.string(column) == Some(value.as_str())
        }
        TaskTrigger::StatusWithDatePresence {
            status,
            date_column,
            present,
        } => {
            let check_matches = composite
                .results()
                .iter()
                .any(|r| r.check == spec.failed_check && r.status.matches(status));
            check_matches && enriched.has_date(date_column) == *present
        }
        TaskTrigger::OrderDeliveryConfirmation => needs_delivery_confirmation(record),
        TaskTrigger::Named { kind } => {
            warn!(kind = %kind, "unrecognized special condition, treating as non-match");
            false
        }
    }
}

fn executor_or_unknown(executor: &Option<String>) -> String {
    executor
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map_or_else(|| UNKNOWN_EXECUTOR.to_string(), str::to_string)
}

/// Synthesizes tasks for one monitored case. Stages with no registered
/// specs produce nothing.
pub fn synthesize_case_tasks(
    monitored: &MonitoredCase,
    record: &CaseRecord,
    table: &TaskMappingTable,
    codes: &TaskCodeGenerator,
    now: DateTime<Utc>,
) -> Vec<Task> {
    let domain = domain_of(monitored.production_type);
    let specs = table.specs_for(domain, monitored.case_stage);
    if specs.is_empty() {
        return Vec::new();
    }
    let enriched = table.enrich(domain, monitored.case_stage, record);
    let monitoring_status = monitored.monitoring_status();

    specs
        .iter()
        .filter(|spec| trigger_fires(spec, &spec.trigger, &monitored.composite, record, &enriched))
        .map(|spec| Task {
            task_code: codes.next_code(),
            case_code: monitored.case_code.clone(),
            source_type: TaskSource::Detailed,
            responsible_executor: executor_or_unknown(&monitored.responsible_executor),
            case_stage: monitored.case_stage,
            failed_check: spec.failed_check.as_str().to_string(),
            task_text: spec.task_text.clone(),
            reason_text: spec.reason_text.clone(),
            monitoring_status: monitoring_status.clone(),
            is_completed: false,
            created_date: now,
            document_type: None,
            department: None,
            request_code: None,
        })
        .collect()
}

/// Synthesizes tasks from the processed document table.
///
/// The processed table carries no executor, so each task resolves one by
/// a first-match join into the original document table on the case code.
pub fn synthesize_document_tasks(
    processed: &[ProcessedDocument],
    originals: &[DocumentRecord],
    table: &TaskMappingTable,
    codes: &TaskCodeGenerator,
    now: DateTime<Utc>,
) -> Vec<Task> {
    let specs = table.specs_for(TaskDomain::Documents, Stage::ExecutionDocumentReceived);
    let mut tasks = Vec::new();

    for doc in processed {
        for spec in specs {
            let fires = match &spec.trigger {
                TaskTrigger::CheckIndex {
                    completed, status, ..
                } => doc.completed == *completed && doc.monitoring_status.matches(status),
                TaskTrigger::Named { kind } => {
                    warn!(kind = %kind, "unrecognized special condition, treating as non-match");
                    false
                }
                // Case-column conditions have no meaning on document rows.
                _ => false,
            };
            if !fires {
                continue;
            }
            let executor = originals
                .iter()
                .find(|orig| orig.case_code == doc.case_code)
                .map(|orig| executor_or_unknown(&orig.responsible_executor))
                .unwrap_or_else(|| UNKNOWN_EXECUTOR.to_string());

            tasks.push(Task {
                task_code: codes.next_code(),
                case_code: doc.case_code.clone(),
                source_type: TaskSource::Documents,
                responsible_executor: executor,
                case_stage: Stage::ExecutionDocumentReceived,
                failed_check: spec.failed_check.as_str().to_string(),
                task_text: spec.task_text.clone(),
                reason_text: spec.reason_text.clone(),
                monitoring_status: doc.monitoring_status.as_str().to_string(),
                is_completed: false,
                created_date: now,
                document_type: Some(doc.document.clone()),
                department: Some(doc.department.clone()),
                request_code: Some(doc.request_code.clone()),
            });
        }
    }
    tasks
}
