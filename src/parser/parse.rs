//! Line parser coordinator
//!
//! This module provides the [`LineParser`] struct, its cursor helpers and the
//! public entry points [`parse_line`] and [`validate_line`].
//!
//! # Parser Architecture
//!
//! A line is accepted in a single left-to-right pass over its characters, with
//! one character of lookahead and no backtracking:
//! - This module: cursor state, helper methods and dispatch on the `int ` prefix
//! - `declarations`: `int a, b = expr;` lines and the reserved-word set
//! - `statements`: `name = expr;` lines
//! - `expressions`: operand/operator alternation with parenthesised groups
//!
//! The same pass that checks the grammar also builds the [`Statement`]s, so
//! validation and extraction can never disagree about a line.
//!
//! # Symbol table side effects
//!
//! Declarations are registered as soon as each declarator is accepted, which
//! makes `int a = 1, b = a;` valid. If the line is rejected later on, every
//! name it declared is rolled back before the error is returned.

use crate::compiler::constants::MAX_NESTING_DEPTH;
use crate::parser::ast::{SourceLocation, Statement};
use crate::parser::errors::{ParseError, ParseErrorKind};
use crate::parser::symbols::SymbolTable;

/// Validate and extract one source line against `symbols`.
///
/// On success the table holds every name the line declared; on failure it is
/// left exactly as it was.
pub fn parse_line(line: &str, symbols: &mut SymbolTable) -> Result<Vec<Statement>, ParseError> {
    LineParser::new(line, symbols).parse()
}

/// Accept/reject form of [`parse_line`].
pub fn validate_line(line: &str, symbols: &mut SymbolTable) -> bool {
    parse_line(line, symbols).is_ok()
}

/// Recursive descent parser for a single line
pub struct LineParser<'a, 's> {
    /// The line exactly as handed in, kept as each statement's `raw`
    pub(crate) raw: &'a str,
    /// `raw` with surrounding whitespace removed; the cursor walks this
    pub(crate) source: &'a str,
    /// Byte offset of `source` inside `raw`, for column numbers
    offset: usize,
    pub(crate) position: usize,
    line: usize,
    pub(crate) depth: usize,
    pub(crate) max_depth: usize,
    pub(crate) symbols: &'s mut SymbolTable,
}

impl<'a, 's> LineParser<'a, 's> {
    pub fn new(raw: &'a str, symbols: &'s mut SymbolTable) -> Self {
        let source = raw.trim();
        let offset = raw.len() - raw.trim_start().len();
        LineParser {
            raw,
            source,
            offset,
            position: 0,
            line: 1,
            depth: 0,
            max_depth: MAX_NESTING_DEPTH,
            symbols,
        }
    }

    /// Line number reported in error locations
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse the whole line, dispatching on its leading token.
    pub fn parse(mut self) -> Result<Vec<Statement>, ParseError> {
        let checkpoint = self.symbols.checkpoint();

        let result = if self.source.starts_with("int ") {
            self.parse_declaration_line()
        } else {
            self.parse_assignment_line()
        };

        if result.is_err() {
            self.symbols.rollback(checkpoint);
        }
        result
    }

    // ===== Helper methods =====

    /// Peek at current character without consuming
    pub(crate) fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Advance past the current character
    pub(crate) fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Skip blanks between tokens. Only the space character separates tokens.
    pub(crate) fn skip_spaces(&mut self) {
        while self.peek() == Some(' ') {
            self.position += 1;
        }
    }

    pub(crate) fn skip_digits(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.position += 1;
        }
    }

    /// Consume a maximal run of `[A-Za-z0-9_]`, which may be empty.
    pub(crate) fn read_identifier(&mut self) -> &'a str {
        let source = self.source;
        let start = self.position;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.position += 1;
        }
        &source[start..self.position]
    }

    /// Slice of the trimmed line between `start` and the cursor, without trailing blanks
    pub(crate) fn text_since(&self, start: usize) -> &'a str {
        let source = self.source;
        source[start..self.position].trim_end()
    }

    /// After the final `;` only whitespace may follow.
    pub(crate) fn expect_end_of_line(&mut self) -> Result<(), ParseError> {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected("end of line after ';'"))
        }
    }

    /// Register a freshly declared name, rejecting duplicates.
    pub(crate) fn declare(&mut self, name: &str, at: usize) -> Result<(), ParseError> {
        if self.symbols.is_declared(name) {
            return Err(self.error_at(ParseErrorKind::Redeclaration(name.to_string()), at));
        }
        if !self.symbols.declare(name) {
            let capacity = self.symbols.capacity();
            return Err(self.error_at(ParseErrorKind::SymbolTableFull { capacity }, at));
        }
        Ok(())
    }

    pub(crate) fn location_at(&self, position: usize) -> SourceLocation {
        SourceLocation::new(self.line, self.offset + position + 1)
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.location_at(self.position)
    }

    pub(crate) fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.current_location())
    }

    pub(crate) fn error_at(&self, kind: ParseErrorKind, position: usize) -> ParseError {
        ParseError::new(kind, self.location_at(position))
    }

    pub(crate) fn unexpected(&self, expected: &'static str) -> ParseError {
        self.error(ParseErrorKind::UnexpectedToken {
            found: self.peek(),
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SymbolTable {
        SymbolTable::new(32)
    }

    #[test]
    fn test_dispatch_declaration() {
        let mut symbols = table();
        let stmts = parse_line("int a;", &mut symbols).unwrap();
        assert_eq!(stmts, vec![Statement::declaration("a", None, "int a;")]);
    }

    #[test]
    fn test_dispatch_assignment() {
        let mut symbols = table();
        symbols.declare("a");
        let stmts = parse_line("a = 1;", &mut symbols).unwrap();
        assert_eq!(stmts, vec![Statement::assignment("a", "1", "a = 1;")]);
    }

    #[test]
    fn test_raw_keeps_surrounding_whitespace() {
        let mut symbols = table();
        let stmts = parse_line("  int a;  ", &mut symbols).unwrap();
        assert_eq!(stmts[0].raw(), "  int a;  ");
    }

    #[test]
    fn test_column_counts_from_untrimmed_line() {
        let mut symbols = table();
        let err = parse_line("   y = 1;", &mut symbols).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownIdentifier("y".to_string()));
        assert_eq!(err.location, SourceLocation::new(1, 4));
    }

    #[test]
    fn test_at_line_sets_error_line() {
        let mut symbols = table();
        let err = LineParser::new("q = 2;", &mut symbols)
            .at_line(7)
            .parse()
            .unwrap_err();
        assert_eq!(err.location.line, 7);
    }

    #[test]
    fn test_int_without_space_is_an_assignment_target() {
        let mut symbols = table();
        symbols.declare("intx");
        assert!(validate_line("intx = 4;", &mut symbols));
    }

    #[test]
    fn test_empty_line_is_rejected() {
        let mut symbols = table();
        let err = parse_line("", &mut symbols).unwrap_err();
        assert!(matches!(
            err.kind,
            ParseErrorKind::UnexpectedToken { found: None, .. }
        ));
    }
}
