//! Declarator rendering.
//!
//! Records render to C-like declarator text. Each child is rendered together
//! with its own precedence so the parent can decide whether to parenthesize,
//! e.g. an array of pointers is `(int*)[]` while an array of ints is `int[]`.
//!
//! Type graphs may be cyclic. The renderer tracks the indices on the current
//! path and emits a `<<cycle 0x....>>` placeholder instead of recursing into
//! one it is already inside.

#[cfg(test)]
mod render_tests;

use std::collections::HashSet;

use crate::index::TypeIndex;
use crate::primitive::Primitive;
use crate::record::Record;
use crate::table::{TableError, TypeTable};

/// Binding strength of a declarator, tightest first.
///
/// A parent composes a child without parentheses when the child binds at
/// least as tightly as the parent requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bind {
    Ptr,
    Array,
    Proc,
    Plain,
}

impl Record {
    /// Intrinsic precedence of this record's declarator.
    pub fn precedence(&self) -> Bind {
        match self {
            Self::Pointer(_) => Bind::Ptr,
            Self::BasicArray(_) | Self::Array(_) => Bind::Array,
            Self::Procedure(_) | Self::MemberFunction(_) => Bind::Proc,
            _ => Bind::Plain,
        }
    }
}

/// Rendered text paired with the precedence it binds at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub precedence: Bind,
}

impl Rendered {
    pub(crate) fn new(text: String, precedence: Bind) -> Self {
        Self { text, precedence }
    }

    pub(crate) fn plain(text: String) -> Self {
        Self::new(text, Bind::Plain)
    }

    fn cycle(index: TypeIndex) -> Self {
        Self::plain(format!("<<cycle {index}>>"))
    }
}

/// Walks the record table for one top-level render.
pub struct Renderer<'t> {
    table: &'t TypeTable,
    visiting: HashSet<TypeIndex>,
}

impl<'t> Renderer<'t> {
    pub fn new(table: &'t TypeTable) -> Self {
        Self {
            table,
            visiting: HashSet::new(),
        }
    }

    pub fn table(&self) -> &'t TypeTable {
        self.table
    }

    pub fn record(&mut self, record: &Record, bind: Bind) -> Result<Rendered, TableError> {
        match record {
            Record::Modifier(r) => r.render(self, bind),
            Record::Pointer(r) => r.render(self, bind),
            Record::Procedure(r) => r.render(self, bind),
            Record::MemberFunction(r) => r.render(self, bind),
            Record::ArgList(r) => r.render(self, bind),
            Record::FieldList(r) => r.render(self, bind),
            Record::Bitfield(r) => r.render(self, bind),
            Record::BasicArray(r) => r.render(self, bind),
            Record::Array(r) => r.render(self, bind),
            Record::Composite(r) => Ok(r.render()),
            Record::Enum(r) => Ok(r.render()),
            Record::FriendFunction(r) => r.render(self, bind),
            Record::List(r) => Ok(r.render()),
            Record::Unsupported(r) => Ok(r.render()),
        }
    }

    /// Render the record at `index`, resolving it through the table.
    ///
    /// Primitives never reach the table. Unknown indices propagate as
    /// [`TableError::UnknownIndex`].
    pub fn child(&mut self, index: TypeIndex, bind: Bind) -> Result<Rendered, TableError> {
        if let Some(primitive) = Primitive::from_index(index) {
            let precedence = if primitive.is_pointer() {
                Bind::Ptr
            } else {
                Bind::Plain
            };
            return Ok(Rendered::new(primitive.render(), precedence));
        }

        if !self.visiting.insert(index) {
            tracing::debug!(%index, "cycle while rendering");
            return Ok(Rendered::cycle(index));
        }
        let table = self.table;
        let result = table
            .resolve(index)
            .and_then(|record| self.record(record, bind));
        self.visiting.remove(&index);
        result
    }

    /// Name of a class used as a scope (`Foo` in `int Foo::*`).
    pub fn scope_name(&mut self, index: TypeIndex) -> Result<String, TableError> {
        if let Some(Record::Composite(composite)) = self.table.get(index) {
            return Ok(composite.name.clone());
        }
        Ok(self.child(index, Bind::Plain)?.text)
    }
}

/// Render a record that may or may not live in `table`.
pub fn render(table: &TypeTable, record: &Record, bind: Bind) -> Result<String, TableError> {
    Ok(Renderer::new(table).record(record, bind)?.text)
}

/// Render the record stored at `index`.
pub fn render_index(table: &TypeTable, index: TypeIndex, bind: Bind) -> Result<String, TableError> {
    Ok(Renderer::new(table).child(index, bind)?.text)
}
