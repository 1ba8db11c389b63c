// Default limits for a compilation run

/// Default symbol-table capacity (distinct variables per run)
pub const MAX_SYMBOLS: usize = 100;

/// Deepest parenthesis nesting accepted in an expression
pub const MAX_NESTING_DEPTH: usize = 64;

/// Memory budget for the per-line snapshot history, in bytes
pub const HISTORY_MEMORY_LIMIT: usize = 64 * 1024 * 1024;
