//! Record table: the mapping from type index to decoded record.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::index::{CategoryIndex, TypeIndex};
use crate::primitive::Primitive;
use crate::record::Record;
use crate::render::{Bind, render_index};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("unknown type index {0}")]
    UnknownIndex(TypeIndex),
    #[error("type index {0} is already defined")]
    DuplicateIndex(TypeIndex),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    record: Record,
    dependencies: Vec<CategoryIndex>,
}

/// Decoded records keyed by type index, in insertion order.
///
/// Records hold indices, never references to each other, so cyclic type
/// graphs are plain data here. Cycles only matter to [`render`](Self::render).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeTable {
    first_index: TypeIndex,
    records: IndexMap<TypeIndex, Entry>,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    pub fn new() -> Self {
        Self::with_first_index(TypeIndex::FIRST_RECORD)
    }

    pub fn with_first_index(first_index: TypeIndex) -> Self {
        Self {
            first_index,
            records: IndexMap::new(),
        }
    }

    pub fn first_index(&self) -> TypeIndex {
        self.first_index
    }

    pub fn insert(&mut self, index: TypeIndex, record: Record) -> Result<(), TableError> {
        self.insert_with_dependencies(index, record, Vec::new())
    }

    /// Insert a record along with the references its decoder pushed.
    pub fn insert_with_dependencies(
        &mut self,
        index: TypeIndex,
        record: Record,
        dependencies: Vec<CategoryIndex>,
    ) -> Result<(), TableError> {
        if self.records.contains_key(&index) {
            return Err(TableError::DuplicateIndex(index));
        }
        self.records.insert(
            index,
            Entry {
                record,
                dependencies,
            },
        );
        Ok(())
    }

    /// Look up a record, failing with [`TableError::UnknownIndex`] if absent.
    pub fn resolve(&self, index: TypeIndex) -> Result<&Record, TableError> {
        self.get(index).ok_or(TableError::UnknownIndex(index))
    }

    pub fn get(&self, index: TypeIndex) -> Option<&Record> {
        self.records.get(&index).map(|entry| &entry.record)
    }

    pub fn contains(&self, index: TypeIndex) -> bool {
        self.records.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeIndex, &Record)> {
        self.records.iter().map(|(&index, entry)| (index, &entry.record))
    }

    /// Index after the last inserted one, or the first index when empty.
    /// `None` once the last inserted index is `u32::MAX`.
    pub fn next_index(&self) -> Option<TypeIndex> {
        match self.records.last() {
            Some((&index, _)) => index.next(),
            None => Some(self.first_index),
        }
    }

    /// References pushed while `index` was decoded, in push order.
    pub fn dependencies(&self, index: TypeIndex) -> Option<&[CategoryIndex]> {
        self.records
            .get(&index)
            .map(|entry| entry.dependencies.as_slice())
    }

    /// Byte size of a type, when it can be determined from the table alone.
    pub fn size_of(&self, index: TypeIndex) -> Option<u64> {
        let mut visited = HashSet::new();
        self.size_of_inner(index, &mut visited)
    }

    fn size_of_inner(&self, index: TypeIndex, visited: &mut HashSet<TypeIndex>) -> Option<u64> {
        if let Some(primitive) = Primitive::from_index(index) {
            return primitive.size();
        }
        if !visited.insert(index) {
            return None;
        }
        match self.get(index)? {
            Record::Pointer(pointer) => match pointer.attributes.size() {
                0 => None,
                size => Some(size as u64),
            },
            Record::Modifier(modifier) => self.size_of_inner(modifier.modified, visited),
            Record::Array(array) => array.size.as_u64(),
            Record::Composite(composite) if !composite.property.is_forward_ref() => {
                composite.size.as_u64()
            }
            Record::Enum(enumeration) => self.size_of_inner(enumeration.underlying, visited),
            _ => None,
        }
    }

    /// Declarator text for `index` at the loosest binding.
    pub fn render(&self, index: TypeIndex) -> Result<String, TableError> {
        render_index(self, index, Bind::Plain)
    }
}
