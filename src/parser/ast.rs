// Statement records produced by the line parser

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A single extracted statement, ready for the code generator.
///
/// `raw` is always the full source line the statement came from, so a line
/// declaring three names yields three statements sharing the same `raw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `int lhs;` or `int lhs = rhs;`
    Declaration {
        lhs: String,
        rhs: Option<String>,
        raw: String,
    },
    /// `lhs = rhs;` against an already declared name
    Assignment {
        lhs: String,
        rhs: String,
        raw: String,
    },
}

impl Statement {
    pub fn declaration(lhs: impl Into<String>, rhs: Option<String>, raw: impl Into<String>) -> Self {
        Statement::Declaration {
            lhs: lhs.into(),
            rhs,
            raw: raw.into(),
        }
    }

    pub fn assignment(lhs: impl Into<String>, rhs: impl Into<String>, raw: impl Into<String>) -> Self {
        Statement::Assignment {
            lhs: lhs.into(),
            rhs: rhs.into(),
            raw: raw.into(),
        }
    }

    pub fn is_declaration(&self) -> bool {
        matches!(self, Statement::Declaration { .. })
    }

    pub fn lhs(&self) -> &str {
        match self {
            Statement::Declaration { lhs, .. } | Statement::Assignment { lhs, .. } => lhs,
        }
    }

    /// Right-hand side text; empty for a declaration without initializer.
    pub fn rhs(&self) -> &str {
        match self {
            Statement::Declaration { rhs, .. } => rhs.as_deref().unwrap_or(""),
            Statement::Assignment { rhs, .. } => rhs,
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            Statement::Declaration { raw, .. } | Statement::Assignment { raw, .. } => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_without_initializer_has_empty_rhs() {
        let stmt = Statement::declaration("a", None, "int a;");
        assert!(stmt.is_declaration());
        assert_eq!(stmt.lhs(), "a");
        assert_eq!(stmt.rhs(), "");
        assert_eq!(stmt.raw(), "int a;");
    }

    #[test]
    fn test_assignment_accessors() {
        let stmt = Statement::assignment("x", "x + 1", "x = x + 1;");
        assert!(!stmt.is_declaration());
        assert_eq!(stmt.lhs(), "x");
        assert_eq!(stmt.rhs(), "x + 1");
    }
}
