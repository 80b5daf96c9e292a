use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of configuration errors.
///
/// Per-row data problems never surface here — they degrade to `no_data`
/// check results. `ConfigError` is reserved for programmer/config mistakes
/// and fails fast at mapping-table construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigErrorKind {
    /// An index trigger points past its stage's check list.
    CheckIndexOutOfRange,
    /// A special condition references a column with no registered accessor.
    UnknownColumn,
    /// A task spec is registered under a stage that runs no checks.
    StageWithoutChecks,
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckIndexOutOfRange => write!(f, "CheckIndexOutOfRange"),
            Self::UnknownColumn => write!(f, "UnknownColumn"),
            Self::StageWithoutChecks => write!(f, "StageWithoutChecks"),
        }
    }
}

/// Structured configuration error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigError {
    pub kind: ConfigErrorKind,
    pub message: String,
}

impl ConfigError {
    pub fn index_out_of_range(message: impl Into<String>) -> Self {
        Self {
            kind: ConfigErrorKind::CheckIndexOutOfRange,
            message: message.into(),
        }
    }

    pub fn unknown_column(message: impl Into<String>) -> Self {
        Self {
            kind: ConfigErrorKind::UnknownColumn,
            message: message.into(),
        }
    }

    pub fn stage_without_checks(message: impl Into<String>) -> Self {
        Self {
            kind: ConfigErrorKind::StageWithoutChecks,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ConfigError {}
