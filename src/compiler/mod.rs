//! Compilation run driver
//!
//! - [`session`]: [`session::Session`], the line-by-line loop over a source text
//! - [`config`]: limits and failure policy
//! - [`constants`]: default limits
//! - [`errors`]: run-level errors
//! - [`report`]: plain-text report of a finished run
//!
//! # Failure policy
//!
//! By default a run is fail-fast: the first invalid line ends it, and nothing
//! after that line is looked at. [`config::FailurePolicy::Continue`] records the
//! rejection and keeps going instead.

pub mod config;
pub mod constants;
pub mod errors;
pub mod report;
pub mod session;
