//! Compilation session: the line-by-line driver
//!
//! A [`Session`] owns everything that lives for one run: the symbol table,
//! the statements extracted so far (in source order, ready for the code
//! generator) and a snapshot of every processed line.
//!
//! Each non-blank line is normalized, validated and extracted in a single pass.
//! What happens on a rejected line depends on the configured [`FailurePolicy`].

use super::config::{CompilerConfig, FailurePolicy};
use super::errors::CompileError;
use crate::parser::ast::Statement;
use crate::parser::errors::ParseError;
use crate::parser::normalize::normalize_line;
use crate::parser::parse::LineParser;
use crate::parser::symbols::SymbolTable;
use crate::snapshot::{History, LineOutcome, LineSnapshot};

#[derive(Debug)]
pub struct Session {
    config: CompilerConfig,
    symbols: SymbolTable,
    statements: Vec<Statement>,
    history: History,
    diagnostics: Vec<ParseError>,
}

impl Session {
    pub fn new(config: CompilerConfig) -> Self {
        Session {
            symbols: SymbolTable::new(config.max_symbols),
            statements: Vec::new(),
            history: History::new(config.history_limit),
            diagnostics: Vec::new(),
            config,
        }
    }

    /// Process every line of `source`, numbering lines from 1.
    ///
    /// Under [`FailurePolicy::FailFast`] the run stops at the first rejected
    /// line; the history still includes that line.
    pub fn run(&mut self, source: &str) -> Result<(), CompileError> {
        for (index, line) in source.lines().enumerate() {
            self.process_line(index + 1, line)?;
        }
        Ok(())
    }

    /// Process one source line and return its outcome.
    ///
    /// Blank lines are skipped without a snapshot and yield `None`. A line is
    /// committed as a whole: if its snapshot does not fit in the history, the
    /// names it declared are rolled back and nothing else changes.
    pub fn process_line(
        &mut self,
        line_number: usize,
        text: &str,
    ) -> Result<Option<&LineOutcome>, CompileError> {
        let mut line = text.to_string();
        normalize_line(&mut line);
        if line.is_empty() {
            return Ok(None);
        }

        let checkpoint = self.symbols.checkpoint();
        let result = LineParser::new(&line, &mut self.symbols)
            .at_line(line_number)
            .with_max_depth(self.config.max_nesting_depth)
            .parse();

        let outcome = match result {
            Ok(statements) => LineOutcome::Accepted {
                statements,
                declared: self.symbols.declared_since(checkpoint).to_vec(),
            },
            Err(error) => LineOutcome::Rejected(error),
        };

        let snapshot = LineSnapshot {
            line: line_number,
            source: line,
            outcome,
            symbols: self.symbols.names().to_vec(),
        };
        if let Err(e) = self.history.push(snapshot) {
            self.symbols.rollback(checkpoint);
            return Err(e);
        }

        let Some(snapshot) = self.history.last() else {
            return Ok(None);
        };
        match &snapshot.outcome {
            LineOutcome::Accepted { statements, .. } => {
                self.statements.extend(statements.iter().cloned());
            }
            LineOutcome::Rejected(error) => {
                self.diagnostics.push(error.clone());
                if self.config.failure_policy == FailurePolicy::FailFast {
                    return Err(CompileError::InvalidLine {
                        line: line_number,
                        source: snapshot.source.clone(),
                        error: error.clone(),
                    });
                }
            }
        }

        Ok(Some(&snapshot.outcome))
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Declared names; downstream stages read this as the program's variable set
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Every statement accepted so far, in source order
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Rejections recorded during the run
    pub fn diagnostics(&self) -> &[ParseError] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CompilerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::errors::ParseErrorKind;

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut session = Session::default();
        session.run("\n   \nint a;\n\t\n").unwrap();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().get(0).map(|s| s.line), Some(3));
    }

    #[test]
    fn test_statements_accumulate_in_order() {
        let mut session = Session::default();
        session.run("int x;\nx = x + 1;\nint y = x;").unwrap();
        let lhs: Vec<&str> = session.statements().iter().map(|s| s.lhs()).collect();
        assert_eq!(lhs, vec!["x", "x", "y"]);
        assert_eq!(session.symbols().names(), ["x", "y"]);
    }

    #[test]
    fn test_fail_fast_stops_at_first_invalid_line() {
        let mut session = Session::default();
        let err = session.run("int a;\nb = 1;\nint c;").unwrap_err();
        match err {
            CompileError::InvalidLine { line, source, error } => {
                assert_eq!(line, 2);
                assert_eq!(source, "b = 1;");
                assert_eq!(error.kind, ParseErrorKind::UnknownIdentifier("b".to_string()));
                assert_eq!(error.location.line, 2);
            }
            other => panic!("Expected invalid line, got {:?}", other),
        }
        // The failing line is still in the history; the line after it is not
        assert_eq!(session.history().len(), 2);
        assert!(!session.symbols().is_declared("c"));
    }

    #[test]
    fn test_continue_policy_collects_diagnostics() {
        let config = CompilerConfig::default().with_failure_policy(FailurePolicy::Continue);
        let mut session = Session::new(config);
        session.run("int a;\nint a;\nint b = (a;\na = 2;").unwrap();

        assert_eq!(session.diagnostics().len(), 2);
        assert_eq!(session.history().len(), 4);
        assert_eq!(session.symbols().names(), ["a"]);
        assert!(session.has_errors());
    }

    #[test]
    fn test_snapshot_records_declared_names_and_table() {
        let mut session = Session::default();
        session.run("int a;\nint b, c = a;").unwrap();
        let second = session.history().get(1).unwrap();
        assert_eq!(second.declared(), ["b", "c"]);
        assert_eq!(second.symbols, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_configured_nesting_depth_applies() {
        let config = CompilerConfig::default().with_max_nesting_depth(1);
        let mut session = Session::new(config);
        let err = session.process_line(1, "int a = ((1));").unwrap_err();
        assert!(matches!(
            err,
            CompileError::InvalidLine { error, .. }
                if error.kind == ParseErrorKind::NestingTooDeep { limit: 1 }
        ));
    }

    #[test]
    fn test_configured_symbol_capacity_applies() {
        let config = CompilerConfig::default()
            .with_max_symbols(1)
            .with_failure_policy(FailurePolicy::Continue);
        let mut session = Session::new(config);
        session.run("int a;\nint b;").unwrap();
        assert_eq!(
            session.diagnostics()[0].kind,
            ParseErrorKind::SymbolTableFull { capacity: 1 }
        );
    }

    #[test]
    fn test_history_limit_ends_run() {
        let config = CompilerConfig::default().with_history_limit(1);
        let mut session = Session::new(config);
        assert!(matches!(
            session.run("int a;"),
            Err(CompileError::HistoryLimitExceeded { .. })
        ));
        assert!(session.history().is_empty());
        assert!(session.statements().is_empty());
        assert!(session.symbols().is_empty());
    }

    #[test]
    fn test_line_over_history_limit_is_not_committed() {
        let mut baseline = Session::default();
        baseline.run("int a;").unwrap();
        let first_size = baseline.history().memory_usage();

        let config = CompilerConfig::default().with_history_limit(first_size + 10);
        let mut session = Session::new(config);
        let err = session.run("int a;\nint b, c;").unwrap_err();
        assert!(matches!(err, CompileError::HistoryLimitExceeded { .. }));

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.statements().len(), 1);
        assert_eq!(session.symbols().names(), ["a"]);
        assert_eq!(
            session.history().last().map(|s| s.symbols.clone()),
            Some(vec!["a".to_string()])
        );
    }

    #[test]
    fn test_rejected_line_over_history_limit_adds_no_diagnostic() {
        let mut baseline = Session::default();
        baseline.run("int a;").unwrap();
        let first_size = baseline.history().memory_usage();

        let config = CompilerConfig::default()
            .with_history_limit(first_size + 10)
            .with_failure_policy(FailurePolicy::Continue);
        let mut session = Session::new(config);
        let err = session.run("int a;\nghost = 1;").unwrap_err();
        assert!(matches!(err, CompileError::HistoryLimitExceeded { .. }));
        assert_eq!(session.history().len(), 1);
        assert!(session.diagnostics().is_empty());
    }

    #[test]
    fn test_process_line_returns_outcome() {
        let config = CompilerConfig::default().with_failure_policy(FailurePolicy::Continue);
        let mut session = Session::new(config);
        assert_eq!(session.process_line(1, "   ").unwrap(), None);

        match session.process_line(2, "int a = 1, b;").unwrap() {
            Some(LineOutcome::Accepted { statements, declared }) => {
                assert_eq!(statements.len(), 2);
                assert_eq!(declared, &["a", "b"]);
            }
            other => panic!("Expected accepted line, got {:?}", other),
        }

        assert!(matches!(
            session.process_line(3, "c = 1;").unwrap(),
            Some(LineOutcome::Rejected(error))
                if error.kind == ParseErrorKind::UnknownIdentifier("c".to_string())
        ));
        assert_eq!(session.diagnostics().len(), 1);
    }
}
