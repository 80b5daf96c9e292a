//! The task mapping table and its column-accessor registry.
//!
//! Every spec is validated when the table is built: index triggers must
//! point inside their stage's check list and special conditions may only
//! name columns with a registered accessor. A bad entry fails table
//! construction, never a row at batch time.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;

use shared_types::{
    CaseRecord, CheckId, CheckStatus, ConfigError, ProductionType, Stage, TaskDomain, TaskSpec,
    TaskTrigger, COURT_ORDER,
};

use crate::runner::checks_for;

type StringAccessor = fn(&CaseRecord) -> Option<String>;
type DateAccessor = fn(&CaseRecord) -> Option<NaiveDate>;

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// String columns a special condition may match against.
const STRING_COLUMNS: &[(&str, StringAccessor)] = &[
    ("caseCode", |r| Some(r.case_code.clone())),
    ("caseStatus", |r| Some(r.case_status.as_str().to_string())),
    ("courtDetermination", |r| non_empty(&r.court_determination)),
    ("finalCourtAct", |r| non_empty(&r.final_court_act)),
    ("responsibleExecutor", |r| non_empty(&r.responsible_executor)),
];

/// Date columns a special condition may test for presence.
const DATE_COLUMNS: &[(&str, DateAccessor)] = &[
    ("filingDate", |r| r.filing_date),
    ("caseClosingDate", |r| r.case_closing_date),
    ("determinationDate", |r| r.determination_date),
    ("nextHearingDate", |r| r.next_hearing_date),
    ("decisionReceiptDate", |r| r.decision_receipt_date),
    ("actualReceiptDate", |r| r.actual_receipt_date),
    ("actualTransferDate", |r| r.actual_transfer_date),
];

fn string_accessor(column: &str) -> Option<StringAccessor> {
    STRING_COLUMNS
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, accessor)| *accessor)
}

fn date_accessor(column: &str) -> Option<DateAccessor> {
    DATE_COLUMNS
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, accessor)| *accessor)
}

/// Source columns joined onto a case before trigger evaluation.
///
/// Triggers read from here instead of reaching into the record, so the
/// set of columns a spec list depends on is explicit and resolved once
/// per case. Registered accessors win; anything else would have failed
/// validation, so the metadata bag is only a fallback for registered
/// columns the typed record left empty.
#[derive(Debug, Clone, Default)]
pub struct EnrichedCase {
    strings: BTreeMap<String, String>,
    dates: BTreeMap<String, NaiveDate>,
}

impl EnrichedCase {
    pub fn string(&self, column: &str) -> Option<&str> {
        self.strings.get(column).map(String::as_str)
    }

    pub fn has_date(&self, column: &str) -> bool {
        self.dates.contains_key(column)
    }
}

/// Static configuration mapping `(domain, stage)` to the task specs that
/// may fire there. Treated as compiled-in configuration; `builtin` is the
/// production table.
#[derive(Debug, Clone)]
pub struct TaskMappingTable {
    specs: HashMap<(TaskDomain, Stage), Vec<TaskSpec>>,
}

impl TaskMappingTable {
    /// Builds and validates a table from explicit entries.
    pub fn new(
        entries: Vec<((TaskDomain, Stage), Vec<TaskSpec>)>,
    ) -> Result<Self, ConfigError> {
        let table = Self {
            specs: entries.into_iter().collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// The compiled-in production mapping.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(builtin_entries())
    }

    /// Specs registered for the stage, empty when none are. Stages with
    /// no registered specs simply synthesize no tasks.
    pub fn specs_for(&self, domain: TaskDomain, stage: Stage) -> &[TaskSpec] {
        self.specs
            .get(&(domain, stage))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Columns the stage's special conditions need joined in before
    /// evaluation.
    pub fn required_columns(&self, domain: TaskDomain, stage: Stage) -> BTreeSet<&str> {
        let mut columns = BTreeSet::new();
        for spec in self.specs_for(domain, stage) {
            match &spec.trigger {
                TaskTrigger::ColumnEquals { column, .. } => {
                    columns.insert(column.as_str());
                }
                TaskTrigger::StatusWithDatePresence { date_column, .. } => {
                    columns.insert(date_column.as_str());
                }
                TaskTrigger::CheckIndex { .. }
                | TaskTrigger::OrderDeliveryConfirmation
                | TaskTrigger::Named { .. } => {}
            }
        }
        columns
    }

    /// Resolves the stage's required columns against one record.
    pub fn enrich(&self, domain: TaskDomain, stage: Stage, record: &CaseRecord) -> EnrichedCase {
        let mut enriched = EnrichedCase::default();
        for column in self.required_columns(domain, stage) {
            if let Some(accessor) = string_accessor(column) {
                let value = accessor(record).or_else(|| record.metadata_str(column));
                if let Some(value) = value {
                    enriched.strings.insert(column.to_string(), value);
                }
            }
            if let Some(accessor) = date_accessor(column) {
                if let Some(value) = accessor(record) {
                    enriched.dates.insert(column.to_string(), value);
                }
            }
        }
        enriched
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for ((domain, stage), specs) in &self.specs {
            if specs.is_empty() {
                return Err(ConfigError::stage_without_checks(format!(
                    "empty spec list registered for {}/{}",
                    domain.as_str(),
                    stage.as_str()
                )));
            }
            for spec in specs {
                validate_spec(*domain, *stage, spec)?;
            }
        }
        Ok(())
    }
}

fn validate_spec(domain: TaskDomain, stage: Stage, spec: &TaskSpec) -> Result<(), ConfigError> {
    match &spec.trigger {
        TaskTrigger::CheckIndex { index, .. } => {
            let len = match domain {
                TaskDomain::Lawsuit => checks_for(ProductionType::Lawsuit, stage).len(),
                TaskDomain::Order => checks_for(ProductionType::Order, stage).len(),
                // The processed document table carries a single check.
                TaskDomain::Documents => 1,
            };
            if len == 0 {
                return Err(ConfigError::stage_without_checks(format!(
                    "{}/{} runs no checks but has an index trigger",
                    domain.as_str(),
                    stage.as_str()
                )));
            }
            if *index >= len {
                return Err(ConfigError::index_out_of_range(format!(
                    "index {} out of range for {}/{} ({} checks)",
                    index,
                    domain.as_str(),
                    stage.as_str(),
                    len
                )));
            }
        }
        TaskTrigger::ColumnEquals { column, .. } => {
            if string_accessor(column).is_none() {
                return Err(ConfigError::unknown_column(format!(
                    "no string accessor registered for column {column:?}"
                )));
            }
        }
        TaskTrigger::StatusWithDatePresence { date_column, .. } => {
            if date_accessor(date_column).is_none() {
                return Err(ConfigError::unknown_column(format!(
                    "no date accessor registered for column {date_column:?}"
                )));
            }
        }
        TaskTrigger::OrderDeliveryConfirmation | TaskTrigger::Named { .. } => {}
    }
    Ok(())
}

fn overdue_index(index: usize) -> TaskTrigger {
    TaskTrigger::CheckIndex {
        index,
        completed: false,
        status: CheckStatus::Overdue,
    }
}

fn builtin_entries() -> Vec<((TaskDomain, Stage), Vec<TaskSpec>)> {
    vec![
        (
            (TaskDomain::Lawsuit, Stage::FirstStatusChanged),
            vec![TaskSpec::new(
                CheckId::FirstStatusChanged14Days,
                "Сменить статус дела",
                "Статус дела не изменен в течение 14 календарных дней с даты подачи иска",
                overdue_index(0),
            )],
        ),
        (
            (TaskDomain::Lawsuit, Stage::CourtReaction),
            vec![TaskSpec::new(
                CheckId::CourtReaction7Days,
                "Запросить определение суда",
                "Определение суда не получено в течение 7 рабочих дней с даты подачи иска",
                overdue_index(0),
            )],
        ),
        (
            (TaskDomain::Lawsuit, Stage::UnderConsideration),
            vec![
                TaskSpec::new(
                    CheckId::NextHearing3Days,
                    "Назначить следующее заседание",
                    "Следующее заседание не назначено в течение 3 рабочих дней с даты определения",
                    overdue_index(0),
                ),
                TaskSpec::new(
                    CheckId::HearingInterval2Days,
                    "Проверить интервал между заседаниями",
                    "Интервал между заседаниями превышает 2 рабочих дня",
                    overdue_index(1),
                ),
                TaskSpec::new(
                    CheckId::Consideration60Days,
                    "Проконтролировать срок рассмотрения дела",
                    "Дело рассматривается дольше 60 календарных дней с даты подачи иска",
                    overdue_index(2),
                ),
            ],
        ),
        (
            (TaskDomain::Lawsuit, Stage::DecisionMade),
            vec![
                TaskSpec::new(
                    CheckId::Decision45Days,
                    "Запросить решение суда",
                    "Решение не вынесено в течение 45 календарных дней с даты принятия дела",
                    overdue_index(0),
                ),
                TaskSpec::new(
                    CheckId::DecisionReceipt3Days,
                    "Получить решение суда",
                    "Решение не получено в течение 3 календарных дней с даты вынесения",
                    overdue_index(1),
                ),
                TaskSpec::new(
                    CheckId::DecisionTransfer1Day,
                    "Передать решение суда",
                    "Решение не передано в течение 1 календарного дня с даты вынесения",
                    overdue_index(2),
                ),
            ],
        ),
        (
            (TaskDomain::Lawsuit, Stage::Closed),
            vec![TaskSpec::new(
                CheckId::Closed125Days,
                "Закрыть дело",
                "Дело не закрыто в течение 125 календарных дней с даты подачи иска",
                overdue_index(0),
            )],
        ),
        (
            (TaskDomain::Lawsuit, Stage::ExecutionDocumentReceived),
            vec![TaskSpec::new(
                CheckId::ExecutionDocumentReceivedLawsuit,
                "Запросить исполнительный лист",
                "Передача исполнительного листа просрочена и не подтверждена",
                overdue_index(0),
            )],
        ),
        (
            (TaskDomain::Order, Stage::FirstStatusChanged),
            vec![TaskSpec::new(
                CheckId::FirstStatus14Days,
                "Сменить статус дела",
                "Статус дела не изменен в течение 14 календарных дней с даты подачи заявления",
                overdue_index(0),
            )],
        ),
        (
            (TaskDomain::Order, Stage::CourtReaction),
            vec![
                TaskSpec::new(
                    CheckId::CourtReaction60Days,
                    "Проконтролировать реакцию суда",
                    "Реакция суда не завершена в течение 60 календарных дней с даты подачи заявления",
                    overdue_index(0),
                ),
                TaskSpec::new(
                    CheckId::CourtReaction60Days,
                    "Подтвердить передачу исполнительного документа",
                    "Судебный приказ вынесен, передача исполнительного документа не подтверждена",
                    TaskTrigger::OrderDeliveryConfirmation,
                ),
            ],
        ),
        (
            (TaskDomain::Order, Stage::Closed),
            vec![
                TaskSpec::new(
                    CheckId::Closed90Days,
                    "Закрыть дело",
                    "Дело не закрыто в течение 90 календарных дней с даты подачи заявления",
                    overdue_index(0),
                ),
                TaskSpec::new(
                    CheckId::Closed90Days,
                    "Заполнить дату закрытия дела",
                    "Срок закрытия истек, дата закрытия не заполнена",
                    TaskTrigger::StatusWithDatePresence {
                        status: CheckStatus::Overdue,
                        date_column: "caseClosingDate".to_string(),
                        present: false,
                    },
                ),
            ],
        ),
        (
            (TaskDomain::Order, Stage::ExecutionDocumentReceived),
            vec![TaskSpec::new(
                CheckId::ExecutionDocumentReceivedOrder,
                "Запросить исполнительный документ",
                "Передача исполнительного документа просрочена и не подтверждена",
                overdue_index(0),
            )],
        ),
        (
            (TaskDomain::Documents, Stage::ExecutionDocumentReceived),
            vec![
                TaskSpec::new(
                    CheckId::DocumentRequest14Days,
                    "Повторно запросить исполнительный документ",
                    "Срок запроса документа истек, передача не подтверждена",
                    overdue_index(0),
                ),
                TaskSpec::new(
                    CheckId::DocumentRequest14Days,
                    "Заполнить данные по запросу документа",
                    "По запросу документа отсутствуют данные о сроках",
                    TaskTrigger::CheckIndex {
                        index: 0,
                        completed: false,
                        status: CheckStatus::NoData,
                    },
                ),
            ],
        ),
    ]
}

/// Convenience predicate for the order delivery-confirmation condition:
/// a payment order was issued but no transfer date confirms delivery.
pub(crate) fn needs_delivery_confirmation(record: &CaseRecord) -> bool {
    record.production_type == ProductionType::Order
        && record.court_determination.as_deref() == Some(COURT_ORDER)
        && record.actual_transfer_date.is_none()
}
