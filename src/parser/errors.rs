//! Parse error types for the line validator
//!
//! Every rejection carries a [`ParseErrorKind`] and the [`SourceLocation`] where
//! the scan stopped. Callers that only need the accept/reject answer use
//! [`validate_line`](crate::parser::parse::validate_line), which collapses all of
//! these to `false`.

use crate::parser::ast::SourceLocation;
use std::fmt;

/// Why a line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A character that does not fit the grammar at this point
    UnexpectedToken {
        found: Option<char>,
        expected: &'static str,
    },

    /// Identifier used before it was declared
    UnknownIdentifier(String),

    /// Identifier declared a second time
    Redeclaration(String),

    /// Reserved keyword used as a variable name
    ReservedWord(String),

    /// `(` without matching `)` or a stray `)`
    UnbalancedParenthesis,

    /// Expression ends right after an operator
    DanglingOperator,

    /// Line ends before the closing `;`
    MissingTerminator,

    /// Parentheses nested deeper than the configured limit
    NestingTooDeep { limit: usize },

    /// No room left in the symbol table
    SymbolTableFull { capacity: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedToken {
                found: Some(c),
                expected,
            } => write!(f, "Unexpected '{}', expected {}", c.escape_default(), expected),
            ParseErrorKind::UnexpectedToken {
                found: None,
                expected,
            } => write!(f, "Unexpected end of line, expected {}", expected),
            ParseErrorKind::UnknownIdentifier(name) => {
                write!(f, "Use of undeclared identifier '{}'", name)
            }
            ParseErrorKind::Redeclaration(name) => write!(f, "Redeclaration of '{}'", name),
            ParseErrorKind::ReservedWord(name) => {
                write!(f, "'{}' is a reserved word and cannot name a variable", name)
            }
            ParseErrorKind::UnbalancedParenthesis => write!(f, "Unbalanced parenthesis"),
            ParseErrorKind::DanglingOperator => write!(f, "Operator is missing its right operand"),
            ParseErrorKind::MissingTerminator => write!(f, "Expected ';' at end of statement"),
            ParseErrorKind::NestingTooDeep { limit } => {
                write!(f, "Parentheses nested deeper than {} levels", limit)
            }
            ParseErrorKind::SymbolTableFull { capacity } => {
                write!(f, "Symbol table is full ({} names)", capacity)
            }
        }
    }
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: SourceLocation,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, location: SourceLocation) -> Self {
        ParseError { kind, location }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.kind
        )
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_location_and_reason() {
        let err = ParseError::new(
            ParseErrorKind::UnknownIdentifier("x".to_string()),
            SourceLocation::new(3, 1),
        );
        assert_eq!(
            err.to_string(),
            "Parse error at line 3, column 1: Use of undeclared identifier 'x'"
        );
    }

    #[test]
    fn test_display_unexpected_end() {
        let kind = ParseErrorKind::UnexpectedToken {
            found: None,
            expected: "identifier",
        };
        assert_eq!(kind.to_string(), "Unexpected end of line, expected identifier");
    }
}
