//! Expression validation
//!
//! Expressions are checked, not built into a tree. The grammar only enforces
//! that operands and operators alternate and that parentheses balance:
//!
//! ```text
//! expr     ::= operand (operator operand)*
//! operand  ::= identifier | digit+ | "-" digit+ | "(" expr ")"
//! operator ::= "+" | "-" | "*" | "/" | "%"
//! ```
//!
//! The scan is a two-state automaton (operand expected / operator expected).
//! Each parenthesised group is one recursive call, and the recursion depth is
//! capped by the parser's configured maximum depth.
//!
//! An expression stops, without consuming it, at `;`, `,` or the end of the
//! line; the caller decides whether that terminator is legal.

use crate::parser::errors::{ParseError, ParseErrorKind};
use crate::parser::parse::LineParser;
use crate::parser::symbols::SymbolTable;

fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%')
}

impl LineParser<'_, '_> {
    /// Validate an expression starting at the cursor.
    ///
    /// `open_paren` is the position of the `(` this expression sits inside, or
    /// `None` at top level. Inside a group the matching `)` is consumed and ends
    /// the call; at top level a `)` is unbalanced.
    pub(crate) fn validate_expression(&mut self, open_paren: Option<usize>) -> Result<(), ParseError> {
        let mut expect_operand = true;
        let mut seen_operand = false;

        loop {
            self.skip_spaces();
            let c = match self.peek() {
                Some(';') | Some(',') | None => break,
                Some(c) => c,
            };

            if expect_operand {
                match c {
                    '(' => {
                        let at = self.position;
                        self.advance();
                        self.validate_group(at)?;
                    }
                    c if c.is_ascii_alphabetic() || c == '_' => {
                        let at = self.position;
                        let name = self.read_identifier();
                        if !self.symbols.is_declared(name) {
                            return Err(self.error_at(
                                ParseErrorKind::UnknownIdentifier(name.to_string()),
                                at,
                            ));
                        }
                    }
                    '-' => {
                        self.advance();
                        if !matches!(self.peek(), Some(d) if d.is_ascii_digit()) {
                            return Err(self.unexpected("digits after '-'"));
                        }
                        self.skip_digits();
                    }
                    c if c.is_ascii_digit() => self.skip_digits(),
                    ')' if seen_operand => return Err(self.error(ParseErrorKind::DanglingOperator)),
                    ')' if open_paren.is_none() => {
                        return Err(self.error(ParseErrorKind::UnbalancedParenthesis))
                    }
                    _ => return Err(self.unexpected("operand")),
                }
                expect_operand = false;
                seen_operand = true;
            } else {
                match c {
                    ')' => {
                        if open_paren.is_none() {
                            return Err(self.error(ParseErrorKind::UnbalancedParenthesis));
                        }
                        self.advance();
                        return Ok(());
                    }
                    c if is_operator(c) => {
                        self.advance();
                        expect_operand = true;
                    }
                    _ => return Err(self.unexpected("operator or end of expression")),
                }
            }
        }

        if expect_operand {
            return Err(if seen_operand {
                self.error(ParseErrorKind::DanglingOperator)
            } else {
                self.unexpected("expression")
            });
        }

        // Ran into ';', ',' or end of line while a '(' was still open
        if let Some(at) = open_paren {
            return Err(self.error_at(ParseErrorKind::UnbalancedParenthesis, at));
        }

        Ok(())
    }

    /// Validate the body of a group whose `(` sits at `open_paren`.
    fn validate_group(&mut self, open_paren: usize) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            let limit = self.max_depth;
            return Err(self.error_at(ParseErrorKind::NestingTooDeep { limit }, open_paren));
        }
        self.depth += 1;
        self.validate_expression(Some(open_paren))?;
        self.depth -= 1;
        Ok(())
    }
}

/// Check a standalone expression against `symbols` without declaring anything.
pub fn validate_expression(expr: &str, symbols: &mut SymbolTable) -> Result<(), ParseError> {
    let mut parser = LineParser::new(expr, symbols);
    parser.validate_expression(None)?;
    if parser.is_at_end() {
        Ok(())
    } else {
        Err(parser.unexpected("end of expression"))
    }
}
