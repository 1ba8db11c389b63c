//! Plain-text run report
//!
//! One block per processed line: the source, the verdict and, for accepted
//! lines, each extracted statement in compact space-free form. The final
//! symbol table closes the report.

use super::config::FailurePolicy;
use super::session::Session;
use crate::parser::ast::Statement;
use crate::parser::normalize::strip_spaces;
use std::io::{self, Write};

/// Compact one-line rendering, e.g. `DECL c=a+b` or `ASSIGN x=x+1`
pub fn format_statement(statement: &Statement) -> String {
    match statement {
        Statement::Declaration { lhs, rhs: None, .. } => format!("DECL {}", lhs),
        Statement::Declaration {
            lhs, rhs: Some(rhs), ..
        } => format!("DECL {}={}", lhs, strip_spaces(rhs)),
        Statement::Assignment { lhs, rhs, .. } => format!("ASSIGN {}={}", lhs, strip_spaces(rhs)),
    }
}

pub fn write_report<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    let history = session.history();
    let policy = match session.config().failure_policy {
        FailurePolicy::FailFast => "fail-fast",
        FailurePolicy::Continue => "keep-going",
    };
    writeln!(out, "****** SOURCE -> STATEMENTS ******")?;
    writeln!(
        out,
        "Policy: {}, history {}/{} bytes",
        policy,
        history.memory_usage(),
        history.memory_limit()
    )?;

    for (step, snapshot) in history.iter().enumerate() {
        writeln!(out, "[{}] line {}", step + 1, snapshot.line)?;
        writeln!(out, "\tSOURCE:")?;
        writeln!(out, "\t\t{}", snapshot.source)?;

        match snapshot.error() {
            Some(error) => {
                writeln!(out, "\t\tError! Invalid syntax: {}", error.kind)?;
                writeln!(out, "\t\t  at column {}", error.location.column)?;
            }
            None => {
                writeln!(out, "\t\tTransform: Correct syntax")?;
                writeln!(out, "\tSTATEMENTS:")?;
                for statement in snapshot.statements() {
                    writeln!(out, "\t\t{}", format_statement(statement))?;
                }
            }
        }
        writeln!(out)?;
    }

    let names: Vec<&str> = session.symbols().iter().collect();
    writeln!(
        out,
        "SYMBOLS ({}/{}): {}",
        names.len(),
        session.symbols().capacity(),
        names.join(", ")
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::config::CompilerConfig;
    use crate::compiler::constants::HISTORY_MEMORY_LIMIT;

    #[test]
    fn test_format_statement() {
        let decl = Statement::declaration("c", Some("a + b".to_string()), "");
        assert_eq!(format_statement(&decl), "DECL c=a+b");
        let bare = Statement::declaration("a", None, "");
        assert_eq!(format_statement(&bare), "DECL a");
        let assign = Statement::assignment("x", "x * ( 2 )", "");
        assert_eq!(format_statement(&assign), "ASSIGN x=x*(2)");
    }

    #[test]
    fn test_report_lists_lines_and_symbols() {
        let config = CompilerConfig::default().with_failure_policy(FailurePolicy::Continue);
        let mut session = Session::new(config);
        session.run("int a, b = 2;\nc = 1;").unwrap();

        let mut out = Vec::new();
        write_report(&session, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let usage = session.history().memory_usage();
        let header = format!(
            "Policy: keep-going, history {}/{} bytes",
            usage, HISTORY_MEMORY_LIMIT
        );
        assert!(text.contains(&header));
        assert!(text.contains("[1] line 1"));
        assert!(text.contains("Transform: Correct syntax"));
        assert!(text.contains("DECL b=2"));
        assert!(text.contains("[2] line 2"));
        assert!(text.contains("Error! Invalid syntax: Use of undeclared identifier 'c'"));
        assert!(text.contains("SYMBOLS (2/100): a, b"));
    }
}
