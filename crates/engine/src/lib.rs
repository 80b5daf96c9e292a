//! Deadline-compliance rule engine for legal-case monitoring.
//!
//! Stateless batch engine that:
//! 1. Classifies each case into a processing stage (priority-ordered
//!    rule tables per production type)
//! 2. Runs the stage's fixed, ordered deadline checks against a working
//!    calendar and a snapshot of the document-monitoring table
//! 3. Combines the results into a positional composite status
//! 4. Synthesizes work items for failed checks from the task mapping table
//!
//! All per-row evaluation is pure; data-quality problems degrade to
//! `no_data` results instead of failing the batch.

pub mod batch;
pub mod calendar;
pub mod checks;
pub mod classifier;
pub mod documents;
pub mod runner;
pub mod tasks;
