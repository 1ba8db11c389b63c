//! Symbol table of declared variable names
//!
//! One table lives for a whole compilation run. Names are kept in declaration
//! order for diagnostics and for downstream stages that enumerate the program's
//! variables; membership checks go through an `FxHashSet` alongside the ordered list.
//!
//! A [`Checkpoint`] taken before a line is parsed lets the parser undo every
//! name that line declared if the line is later rejected.

use rustc_hash::FxHashSet;

/// Position in the declaration order to roll back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Insertion-ordered set of declared identifiers with a fixed capacity
#[derive(Debug, Clone)]
pub struct SymbolTable {
    names: Vec<String>,
    index: FxHashSet<String>,
    capacity: usize,
}

impl SymbolTable {
    pub fn new(capacity: usize) -> Self {
        SymbolTable {
            names: Vec::new(),
            index: FxHashSet::default(),
            capacity,
        }
    }

    /// Exact, case-sensitive membership test
    pub fn is_declared(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Record `name`. Returns false without touching the table if the name
    /// is already present or the table is full.
    pub fn declare(&mut self, name: &str) -> bool {
        if self.is_full() || self.is_declared(name) {
            return false;
        }
        self.index.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    pub fn is_full(&self) -> bool {
        self.names.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Declared names in declaration order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.names.len())
    }

    /// Forget every name declared after `checkpoint` was taken.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        if checkpoint.0 >= self.names.len() {
            return;
        }
        for name in self.names.drain(checkpoint.0..) {
            self.index.remove(&name);
        }
    }

    /// Names declared since `checkpoint`
    pub fn declared_since(&self, checkpoint: Checkpoint) -> &[String] {
        self.names.get(checkpoint.0..).unwrap_or(&[])
    }
}
