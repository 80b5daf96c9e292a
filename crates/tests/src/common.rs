//! Shared fixtures for the engine test suite.

use chrono::NaiveDate;
use engine::calendar::BusinessCalendar;
use shared_types::{CaseRecord, CaseStatus, DocumentRecord, ProductionType};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Case with every optional field empty.
pub fn case(code: &str, production: ProductionType, status: CaseStatus) -> CaseRecord {
    CaseRecord {
        case_code: code.to_string(),
        case_status: status,
        production_type: production,
        filing_date: None,
        last_request_date: None,
        case_closing_date: None,
        determination_date: None,
        previous_hearing_date: None,
        next_hearing_date: None,
        decision_court_date: None,
        court_decision_date: None,
        decision_receipt_date: None,
        actual_receipt_date: None,
        actual_transfer_date: None,
        final_court_act: None,
        court_determination: None,
        responsible_executor: None,
        metadata: serde_json::Value::Null,
    }
}

pub fn lawsuit(code: &str, status: CaseStatus) -> CaseRecord {
    case(code, ProductionType::Lawsuit, status)
}

pub fn order(code: &str, status: CaseStatus) -> CaseRecord {
    case(code, ProductionType::Order, status)
}

/// Document transaction with only the grouping key filled in.
pub fn document(case_code: &str, document_type: &str, department: &str) -> DocumentRecord {
    DocumentRecord {
        request_code: None,
        case_code: case_code.to_string(),
        document_type: document_type.to_string(),
        department: department.to_string(),
        request_date: None,
        receipt_date: None,
        transfer_date: None,
        response_essence: None,
        responsible_executor: None,
    }
}

/// Weekends-only calendar, enough for most deadline tests.
pub fn weekend_calendar() -> BusinessCalendar {
    BusinessCalendar::weekends_only()
}
