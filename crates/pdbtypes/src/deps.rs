//! Dependency stack: the ledger of references a record incurred while decoding.
//!
//! Decoding is a single forward pass and a record may name an index that
//! appears later in the stream, so references are never resolved eagerly.
//! Instead each embedded index is pushed right after it is decoded and popped
//! before the record's decoder returns. The stack records intent to resolve,
//! not a resolution result.
//!
//! Every push is also appended to a journal that the stream decoder drains
//! after each record, so the table can answer "what did record X depend on"
//! without re-parsing it.

use crate::index::CategoryIndex;

#[derive(Debug, Default)]
pub struct DependencyStack {
    pending: Vec<CategoryIndex>,
    journal: Vec<CategoryIndex>,
}

impl DependencyStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: CategoryIndex) {
        self.pending.push(entry);
        self.journal.push(entry);
    }

    /// Remove the most recent obligation.
    ///
    /// # Panics
    /// Panics if the stack is empty: every pop must pair with an earlier push.
    pub fn pop(&mut self) -> CategoryIndex {
        self.pending.pop().unwrap_or_else(|| self.ensure_not_empty())
    }

    pub fn depth(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Most recent outstanding obligation.
    pub fn top(&self) -> Option<&CategoryIndex> {
        self.pending.last()
    }

    /// Drop obligations above `depth`. Used when a decoder bails out with an
    /// error before reaching its pops.
    pub fn unwind_to(&mut self, depth: usize) {
        self.pending.truncate(depth);
    }

    /// Everything pushed since the journal was last taken.
    pub fn take_journal(&mut self) -> Vec<CategoryIndex> {
        std::mem::take(&mut self.journal)
    }
}
