//! Run-level error types
//!
//! A [`CompileError`] ends a compilation run. Individual line rejections are
//! [`ParseError`]s; under the fail-fast policy the first one is wrapped in
//! [`CompileError::InvalidLine`].

use crate::parser::errors::ParseError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A line failed validation
    InvalidLine {
        line: usize,
        source: String,
        error: ParseError,
    },

    /// Snapshot history outgrew its memory budget
    HistoryLimitExceeded {
        current: usize,
        requested: usize,
        limit: usize,
    },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::InvalidLine {
                line,
                source,
                error,
            } => write!(f, "Invalid syntax on line {} `{}`: {}", line, source, error.kind),
            CompileError::HistoryLimitExceeded {
                current,
                requested,
                limit,
            } => write!(
                f,
                "Snapshot memory limit exceeded: {} + {} > {}",
                current, requested, limit
            ),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::InvalidLine { error, .. } => Some(error),
            CompileError::HistoryLimitExceeded { .. } => None,
        }
    }
}
