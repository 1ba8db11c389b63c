//! Delimiter-based statement extraction
//!
//! [`extract_statements`] re-scans a line that has already been accepted and
//! splits it on `;`, `,` and `=` without checking the grammar. It handles a
//! line holding several `;`-terminated fragments and emits their statements
//! left to right.
//!
//! [`parse_line`](crate::parser::parse::parse_line) already returns the same
//! statements from its validating pass; this entry point serves callers that
//! validated with [`validate_line`](crate::parser::parse::validate_line) and
//! only hold the text.

use crate::parser::ast::Statement;

/// Split an already validated line into statements. Malformed input yields
/// whatever fragments happen to split cleanly; it is never rejected.
pub fn extract_statements(line: &str) -> Vec<Statement> {
    let mut statements = Vec::new();
    let mut rest = line.trim();

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        if let Some(body) = rest.strip_prefix("int ") {
            let Some((declarators, after)) = body.split_once(';') else {
                break;
            };
            statements.extend(
                declarators
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| extract_declarator(segment, line)),
            );
            rest = after;
            continue;
        }

        let Some((fragment, after)) = rest.split_once(';') else {
            break;
        };
        if let Some((lhs, rhs)) = fragment.split_once('=') {
            let (lhs, rhs) = (lhs.trim(), rhs.trim());
            if !lhs.is_empty() && !rhs.is_empty() {
                statements.push(Statement::assignment(lhs, rhs, line));
            }
        }
        rest = after;
    }

    statements
}

fn extract_declarator(segment: &str, line: &str) -> Statement {
    match segment.split_once('=') {
        Some((lhs, rhs)) => {
            let rhs = rhs.trim();
            let rhs = (!rhs.is_empty()).then(|| rhs.to_string());
            Statement::declaration(lhs.trim(), rhs, line)
        }
        None => Statement::declaration(segment, None, line),
    }
}
