//! Declaration line parsing
//!
//! Handles lines introducing one or more `int` variables:
//!
//! ```text
//! decl-line ::= "int" SP+ decl ("," decl)* ";"
//! decl      ::= identifier ["=" expr]
//! ```
//!
//! A declared name must start with a letter, must not be a reserved word and
//! must not already be in the symbol table. Each accepted declarator becomes
//! one [`Statement::Declaration`].

use crate::parser::ast::Statement;
use crate::parser::errors::{ParseError, ParseErrorKind};
use crate::parser::parse::LineParser;

/// Keywords that can never name a variable
pub const RESERVED_WORDS: [&str; 11] = [
    "int", "return", "for", "while", "if", "else", "char", "float", "double", "goto", "main",
];

pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

impl LineParser<'_, '_> {
    /// Parse `int a, b = expr, ...;` including the trailing end-of-line check
    pub(crate) fn parse_declaration_line(&mut self) -> Result<Vec<Statement>, ParseError> {
        if !self.source.starts_with("int ") {
            return Err(self.unexpected("'int' followed by a space"));
        }
        self.position = "int ".len();

        let mut statements = Vec::new();
        loop {
            statements.push(self.parse_declarator()?);

            self.skip_spaces();
            match self.peek() {
                Some(',') => {
                    self.advance();
                }
                Some(';') => {
                    self.advance();
                    break;
                }
                None => return Err(self.error(ParseErrorKind::MissingTerminator)),
                Some(_) => return Err(self.unexpected("',' or ';'")),
            }
        }

        self.expect_end_of_line()?;
        Ok(statements)
    }

    /// Parse one `name` or `name = expr` and register the name
    fn parse_declarator(&mut self) -> Result<Statement, ParseError> {
        self.skip_spaces();

        let at = self.position;
        if !matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            return Err(self.unexpected("variable name"));
        }
        let name = self.read_identifier();

        if is_reserved_word(name) {
            return Err(self.error_at(ParseErrorKind::ReservedWord(name.to_string()), at));
        }

        self.skip_spaces();
        let rhs = if self.peek() == Some('=') {
            self.advance();
            self.skip_spaces();
            let start = self.position;
            self.validate_expression(None)?;
            Some(self.text_since(start).to_string())
        } else {
            None
        };

        // Registered only after the initializer, so `int a = a;` is rejected
        self.declare(name, at)?;

        Ok(Statement::declaration(name, rhs, self.raw))
    }
}
