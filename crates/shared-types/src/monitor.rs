use serde::{Deserialize, Serialize};

use crate::case::{CaseStatus, ProductionType};
use crate::check::CompositeStatus;
use crate::stage::Stage;

/// Engine output for one case: its stage plus the evaluated composite
/// status, exposed to callers as the `caseStage` / `monitoringStatus` /
/// `completionStatus` columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoredCase {
    pub case_code: String,
    pub production_type: ProductionType,
    pub case_status: CaseStatus,
    pub case_stage: Stage,
    pub composite: CompositeStatus,
    #[serde(default)]
    pub responsible_executor: Option<String>,
}

impl MonitoredCase {
    /// Boundary encoding of the per-check statuses.
    pub fn monitoring_status(&self) -> String {
        self.composite.status_string()
    }

    /// Boundary encoding of the per-check completion flags.
    pub fn completion_status(&self) -> String {
        self.composite.completion_string()
    }
}
