//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::deps::DependencyStack;
use crate::index::CategoryIndex;
use crate::leaf::leaf_name;

impl DependencyStack {
    pub(crate) fn ensure_not_empty(&self) -> CategoryIndex {
        panic!("DependencyStack: pop on empty stack (every pop must pair with a push)")
    }

    pub(crate) fn ensure_balanced(&self, base: usize, leaf: u16) {
        let depth = self.depth();
        if depth != base {
            panic!(
                "DependencyStack: {} left depth {depth}, expected {base} \
                 (decoders must pop every obligation they push)",
                leaf_name(leaf).unwrap_or("unknown leaf")
            );
        }
    }
}
