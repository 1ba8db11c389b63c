//! # Introduction
//!
//! minic is the front end of a tiny compiler for an `int`-only subset of C.
//! It reads a source file one line at a time, decides whether each line is a
//! valid declaration or assignment, and extracts accepted lines into
//! [`parser::ast::Statement`] records for a downstream code generator.
//!
//! ## Pipeline
//!
//! ```text
//! Source line → Normalize → Validate + Extract → Statements → Snapshots → TUI / report
//!                               ↕
//!                          Symbol table
//! ```
//!
//! 1. [`parser`] — line validation, the symbol table and statement extraction.
//! 2. [`compiler`] — the per-run [`compiler::session::Session`], its
//!    configuration, failure policy and plain-text report.
//! 3. [`snapshot`] — a snapshot of the run after every processed line.
//! 4. [`ui`] — ratatui-based viewer over the snapshots; not part of the stable
//!    library API.
//!
//! ## Accepted lines
//!
//! `int a, b = 3, c = a + b;` declares names; `a = (b - 1) % c;` assigns to a
//! name declared earlier. Identifiers used in expressions must already be
//! declared, and reserved words can never name a variable.

pub mod compiler;
pub mod parser;
pub mod snapshot;
pub mod ui;
