//! Task-synthesis domain types: mapping-table specs, triggers, and the
//! synthesized work items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::check::{CheckId, CheckStatus};
use crate::stage::Stage;

/// Which mapping-table namespace a spec list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskDomain {
    Lawsuit,
    Order,
    Documents,
}

impl TaskDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lawsuit => "lawsuit",
            Self::Order => "order",
            Self::Documents => "documents",
        }
    }
}

/// Origin of a synthesized task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskSource {
    /// Case-level task from the detailed report.
    Detailed,
    /// Task from the document-monitoring table.
    Documents,
}

/// Condition under which a task spec fires.
///
/// `CheckIndex` addresses the stage's composite status by position; the
/// remaining variants are special conditions evaluated against enriched
/// source columns. `Named` is the escape hatch for predicate kinds this
/// build does not implement: it never matches and logs a warning, so a
/// misconfigured rule is observable without aborting the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskTrigger {
    CheckIndex {
        index: usize,
        completed: bool,
        status: CheckStatus,
    },
    ColumnEquals {
        column: String,
        value: String,
    },
    StatusWithDatePresence {
        status: CheckStatus,
        date_column: String,
        present: bool,
    },
    /// Order-production case whose payment order was issued but whose
    /// delivery has not been confirmed by a transfer date.
    OrderDeliveryConfirmation,
    Named {
        kind: String,
    },
}

/// One entry of the task mapping table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// The check this task remediates; its wire name is the task's
    /// `failed_check` display value.
    pub failed_check: CheckId,
    pub task_text: String,
    pub reason_text: String,
    pub trigger: TaskTrigger,
}

impl TaskSpec {
    pub fn new(
        failed_check: CheckId,
        task_text: impl Into<String>,
        reason_text: impl Into<String>,
        trigger: TaskTrigger,
    ) -> Self {
        Self {
            failed_check,
            task_text: task_text.into(),
            reason_text: reason_text.into(),
            trigger,
        }
    }
}

/// One synthesized work item.
///
/// Task codes are regenerated on every batch run and are not durable
/// identifiers; only uniqueness within a run is guaranteed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub task_code: String,
    pub case_code: String,
    pub source_type: TaskSource,
    pub responsible_executor: String,
    pub case_stage: Stage,
    pub failed_check: String,
    pub task_text: String,
    pub reason_text: String,
    pub monitoring_status: String,
    pub is_completed: bool,
    pub created_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_code: Option<String>,
}

/// Executor value used when no lookup succeeds.
pub const UNKNOWN_EXECUTOR: &str = "unknown";
