// Per-line snapshots of a compilation run

use crate::compiler::errors::CompileError;
use crate::parser::ast::Statement;
use crate::parser::errors::ParseError;

/// Result of processing one non-blank line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Accepted {
        statements: Vec<Statement>,
        /// Names this line added to the symbol table
        declared: Vec<String>,
    },
    Rejected(ParseError),
}

/// State of the run right after one line was processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSnapshot {
    /// 1-based line number in the source file
    pub line: usize,
    /// The normalized line text
    pub source: String,
    pub outcome: LineOutcome,
    /// Symbol table contents after this line, in declaration order
    pub symbols: Vec<String>,
}

impl LineSnapshot {
    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, LineOutcome::Accepted { .. })
    }

    pub fn statements(&self) -> &[Statement] {
        match &self.outcome {
            LineOutcome::Accepted { statements, .. } => statements,
            LineOutcome::Rejected(_) => &[],
        }
    }

    pub fn declared(&self) -> &[String] {
        match &self.outcome {
            LineOutcome::Accepted { declared, .. } => declared,
            LineOutcome::Rejected(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&ParseError> {
        match &self.outcome {
            LineOutcome::Rejected(error) => Some(error),
            LineOutcome::Accepted { .. } => None,
        }
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        // Rough estimate: string payloads plus a fixed overhead per entry
        let statements: usize = self
            .statements()
            .iter()
            .map(|s| s.lhs().len() + s.rhs().len() + s.raw().len() + 64)
            .sum();
        let names: usize = self
            .symbols
            .iter()
            .chain(self.declared())
            .map(|n| n.len() + 24)
            .sum();

        self.source.len() + statements + names + 64
    }
}

/// Ordered history of line snapshots with a memory cap
#[derive(Debug)]
pub struct History {
    snapshots: Vec<LineSnapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl History {
    pub fn new(max_memory: usize) -> Self {
        History {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: LineSnapshot) -> Result<(), CompileError> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(CompileError::HistoryLimitExceeded {
                current: self.current_memory,
                requested: snapshot_size,
                limit: self.max_memory,
            });
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&LineSnapshot> {
        self.snapshots.get(index)
    }

    pub fn last(&self) -> Option<&LineSnapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineSnapshot> {
        self.snapshots.iter()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted(line: usize, source: &str) -> LineSnapshot {
        LineSnapshot {
            line,
            source: source.to_string(),
            outcome: LineOutcome::Accepted {
                statements: vec![Statement::declaration("a", None, source)],
                declared: vec!["a".to_string()],
            },
            symbols: vec!["a".to_string()],
        }
    }

    #[test]
    fn test_push_and_get() {
        let mut history = History::new(1024 * 1024);
        history.push(accepted(1, "int a;")).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0).map(|s| s.line), Some(1));
        assert!(history.memory_usage() > 0);
    }

    #[test]
    fn test_memory_limit() {
        let snapshot = accepted(1, "int a;");
        let size = snapshot.estimated_size();
        let mut history = History::new(size + size / 2);
        history.push(snapshot.clone()).unwrap();

        let err = history.push(snapshot).unwrap_err();
        assert_eq!(
            err,
            CompileError::HistoryLimitExceeded {
                current: size,
                requested: size,
                limit: size + size / 2,
            }
        );
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_rejected_snapshot_accessors() {
        use crate::parser::ast::SourceLocation;
        use crate::parser::errors::ParseErrorKind;

        let error = ParseError::new(ParseErrorKind::DanglingOperator, SourceLocation::new(2, 12));
        let snapshot = LineSnapshot {
            line: 2,
            source: "int z = 5 + ;".to_string(),
            outcome: LineOutcome::Rejected(error.clone()),
            symbols: Vec::new(),
        };
        assert!(!snapshot.is_accepted());
        assert!(snapshot.statements().is_empty());
        assert_eq!(snapshot.error(), Some(&error));
    }
}
