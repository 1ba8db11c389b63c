//! Run configuration
//!
//! [`CompilerConfig`] starts from the limits in [`constants`](super::constants)
//! and is adjusted with the `with_*` builders, typically from command-line flags.

use super::constants::{HISTORY_MEMORY_LIMIT, MAX_NESTING_DEPTH, MAX_SYMBOLS};

/// What a run does when a line is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first invalid line
    #[default]
    FailFast,
    /// Record the diagnostic and move on to the next line
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    pub max_symbols: usize,
    pub max_nesting_depth: usize,
    pub failure_policy: FailurePolicy,
    pub history_limit: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            max_symbols: MAX_SYMBOLS,
            max_nesting_depth: MAX_NESTING_DEPTH,
            failure_policy: FailurePolicy::default(),
            history_limit: HISTORY_MEMORY_LIMIT,
        }
    }
}

impl CompilerConfig {
    pub fn with_max_symbols(mut self, max_symbols: usize) -> Self {
        self.max_symbols = max_symbols;
        self
    }

    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_history_limit(mut self, bytes: usize) -> Self {
        self.history_limit = bytes;
        self
    }
}
