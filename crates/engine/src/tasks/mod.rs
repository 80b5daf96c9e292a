//! Task synthesis: the mapping table, column enrichment, and the
//! synthesizer that turns failed checks into work items.

pub mod mapping;
pub mod synthesizer;

pub use mapping::{EnrichedCase, TaskMappingTable};
pub use synthesizer::{synthesize_case_tasks, synthesize_document_tasks, TaskCodeGenerator};
