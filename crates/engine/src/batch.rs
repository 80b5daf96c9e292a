//! Batch entry points.
//!
//! A run is a one-shot pass over in-memory tables: process the document
//! table, snapshot it, classify and evaluate every case against the
//! snapshot, then synthesize tasks from both outputs. Re-running the
//! batch is the only retry mechanism; everything except task codes is
//! idempotent.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use shared_types::{
    CaseRecord, CheckStatus, DocumentRecord, MonitoredCase, ProcessedDocument, Task,
};

use crate::calendar::WorkingCalendar;
use crate::checks::CheckContext;
use crate::classifier;
use crate::documents::{self, DocumentSnapshot};
use crate::runner;
use crate::tasks::{synthesize_case_tasks, synthesize_document_tasks, TaskCodeGenerator, TaskMappingTable};

/// Everything one batch run produces.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub monitored: Vec<MonitoredCase>,
    pub processed_documents: Vec<ProcessedDocument>,
    /// Turnaround statuses position-aligned with the input document table.
    pub document_turnaround: Vec<CheckStatus>,
    pub tasks: Vec<Task>,
}

/// Classify one case and run its stage checks.
pub fn monitor_case(record: &CaseRecord, ctx: &CheckContext<'_>) -> MonitoredCase {
    let stage = classifier::classify(record);
    let composite = runner::run_stage_checks(record, stage, ctx);
    MonitoredCase {
        case_code: record.case_code.clone(),
        production_type: record.production_type,
        case_status: record.case_status,
        case_stage: stage,
        composite,
        responsible_executor: record.responsible_executor.clone(),
    }
}

/// Classify and evaluate every case, preserving input order.
pub fn monitor_cases(records: &[CaseRecord], ctx: &CheckContext<'_>) -> Vec<MonitoredCase> {
    records.iter().map(|record| monitor_case(record, ctx)).collect()
}

/// Synthesize the full task list for one run. The task-code counter is
/// created here, so codes restart at `TASK_0000001` on every call.
pub fn synthesize_tasks(
    monitored: &[MonitoredCase],
    cases: &[CaseRecord],
    processed_documents: &[ProcessedDocument],
    original_documents: &[DocumentRecord],
    table: &TaskMappingTable,
    now: DateTime<Utc>,
) -> Vec<Task> {
    let codes = TaskCodeGenerator::new();
    let mut tasks = Vec::new();
    for (monitored_case, record) in monitored.iter().zip(cases) {
        tasks.extend(synthesize_case_tasks(
            monitored_case,
            record,
            table,
            &codes,
            now,
        ));
    }
    tasks.extend(synthesize_document_tasks(
        processed_documents,
        original_documents,
        table,
        &codes,
        now,
    ));
    tasks
}

/// Full pipeline over both tables.
pub fn run_batch(
    cases: &[CaseRecord],
    document_table: &[DocumentRecord],
    table: &TaskMappingTable,
    calendar: &dyn WorkingCalendar,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> BatchOutput {
    let processed_documents = documents::monitor_documents(document_table, today);
    let document_turnaround = documents::turnaround_statuses(document_table, calendar, today);
    let snapshot = DocumentSnapshot::new(processed_documents.clone());

    let ctx = CheckContext {
        today,
        calendar,
        documents: &snapshot,
    };
    let monitored = monitor_cases(cases, &ctx);
    let tasks = synthesize_tasks(
        &monitored,
        cases,
        &processed_documents,
        document_table,
        table,
        now,
    );

    info!(
        cases = monitored.len(),
        documents = processed_documents.len(),
        tasks = tasks.len(),
        "batch run complete"
    );

    BatchOutput {
        monitored,
        processed_documents,
        document_turnaround,
        tasks,
    }
}
