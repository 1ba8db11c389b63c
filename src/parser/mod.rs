//! Line validator and statement extractor
//!
//! This module turns single source lines into [`ast::Statement`] records:
//! - [`normalize`]: whitespace trimming helpers
//! - [`symbols`]: the run-wide table of declared names
//! - [`parse`]: the [`parse::LineParser`] and the `parse_line` / `validate_line` entry points
//! - [`extract`]: delimiter-based re-scan of an already accepted line
//! - [`errors`]: rejection reasons
//!
//! # Supported language
//!
//! Two line shapes only, both over a single `int` type:
//!
//! ```text
//! decl-line   ::= "int" SP+ decl ("," decl)* ";"
//! decl        ::= identifier ["=" expr]
//! assign-line ::= identifier "=" expr ";"
//! expr        ::= operand (operator operand)*
//! operand     ::= identifier | digit+ | "-" digit+ | "(" expr ")"
//! operator    ::= "+" | "-" | "*" | "/" | "%"
//! ```
//!
//! Operators carry no precedence here; the code generator decides evaluation order.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent directly over the line's characters, split
//! across files with `impl LineParser` blocks.

pub mod ast;
pub mod declarations;
pub mod errors;
pub mod expressions;
pub mod extract;
pub mod normalize;
pub mod parse;
pub mod statements;
pub mod symbols;
