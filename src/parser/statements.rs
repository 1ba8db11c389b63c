//! Assignment line parsing: `name = expr;`
//!
//! The target must already be declared. Nothing is added to the symbol table.

use crate::parser::ast::Statement;
use crate::parser::declarations::is_reserved_word;
use crate::parser::errors::{ParseError, ParseErrorKind};
use crate::parser::parse::LineParser;

impl LineParser<'_, '_> {
    pub(crate) fn parse_assignment_line(&mut self) -> Result<Vec<Statement>, ParseError> {
        let at = self.position;
        if !matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            return Err(self.unexpected("variable name"));
        }
        let name = self.read_identifier();
        if is_reserved_word(name) {
            return Err(self.error_at(ParseErrorKind::ReservedWord(name.to_string()), at));
        }

        self.skip_spaces();
        if self.peek() != Some('=') {
            return Err(self.unexpected("'='"));
        }
        self.advance();
        self.skip_spaces();

        let start = self.position;
        self.validate_expression(None)?;
        let rhs = self.text_since(start);

        self.skip_spaces();
        match self.peek() {
            Some(';') => {
                self.advance();
            }
            None => return Err(self.error(ParseErrorKind::MissingTerminator)),
            Some(_) => return Err(self.unexpected("';'")),
        }
        self.expect_end_of_line()?;

        if !self.symbols.is_declared(name) {
            return Err(self.error_at(ParseErrorKind::UnknownIdentifier(name.to_string()), at));
        }

        Ok(vec![Statement::assignment(name, rhs, self.raw)])
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::Statement;
    use crate::parser::errors::ParseErrorKind;
    use crate::parser::parse::parse_line;
    use crate::parser::symbols::SymbolTable;

    fn declared(names: &[&str]) -> SymbolTable {
        let mut table = SymbolTable::new(16);
        for name in names {
            table.declare(name);
        }
        table
    }

    #[test]
    fn test_assignment_to_declared_name() {
        let mut symbols = declared(&["x"]);
        let stmts = parse_line("x = x + 1;", &mut symbols).unwrap();
        assert_eq!(stmts, vec![Statement::assignment("x", "x + 1", "x = x + 1;")]);
        assert_eq!(symbols.len(), 1);
    }

    #[test]
    fn test_undeclared_target() {
        let mut symbols = declared(&[]);
        assert_eq!(
            parse_line("x = 5;", &mut symbols).unwrap_err().kind,
            ParseErrorKind::UnknownIdentifier("x".to_string())
        );
    }

    #[test]
    fn test_reserved_target() {
        let mut symbols = declared(&[]);
        assert_eq!(
            parse_line("return = 5;", &mut symbols).unwrap_err().kind,
            ParseErrorKind::ReservedWord("return".to_string())
        );
    }

    #[test]
    fn test_syntax_is_checked_before_declaredness() {
        let mut symbols = declared(&[]);
        assert_eq!(
            parse_line("x = (1;", &mut symbols).unwrap_err().kind,
            ParseErrorKind::UnbalancedParenthesis
        );
    }

    #[test]
    fn test_malformed_assignments() {
        let mut symbols = declared(&["x", "y"]);
        assert!(matches!(
            parse_line("x 5;", &mut symbols).unwrap_err().kind,
            ParseErrorKind::UnexpectedToken { found: Some('5'), .. }
        ));
        assert!(matches!(
            parse_line("x = 1, y = 2;", &mut symbols).unwrap_err().kind,
            ParseErrorKind::UnexpectedToken { found: Some(','), .. }
        ));
        assert!(matches!(
            parse_line("_x = 1;", &mut symbols).unwrap_err().kind,
            ParseErrorKind::UnexpectedToken { found: Some('_'), .. }
        ));
        assert_eq!(
            parse_line("x = 1", &mut symbols).unwrap_err().kind,
            ParseErrorKind::MissingTerminator
        );
        assert!(parse_line("x = 1; y = 2;", &mut symbols).is_err());
    }

    #[test]
    fn test_trailing_whitespace_after_semicolon() {
        let mut symbols = declared(&["x"]);
        assert!(parse_line("x = 2;   \r\n", &mut symbols).is_ok());
    }
}
