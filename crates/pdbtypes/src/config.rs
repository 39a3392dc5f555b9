//! Decoder options.

use crate::index::TypeIndex;

/// Options for [`decode_stream`](crate::decode_stream).
///
/// ```
/// use pdbtypes::{Config, TypeIndex};
///
/// let config = Config::new().first_index(TypeIndex(0x2000)).strict_leaves(true);
/// assert_eq!(config.get_first_index(), TypeIndex(0x2000));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) first_index: TypeIndex,
    pub(crate) strict_leaves: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_index: TypeIndex::FIRST_RECORD,
            strict_leaves: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index given to the first record in the stream (the header's
    /// `TypeIndexBegin`).
    pub fn first_index(mut self, index: TypeIndex) -> Self {
        self.first_index = index;
        self
    }

    /// Fail records with unmodelled leaves instead of keeping them as
    /// [`Unsupported`](crate::Unsupported).
    pub fn strict_leaves(mut self, strict: bool) -> Self {
        self.strict_leaves = strict;
        self
    }

    pub fn get_first_index(&self) -> TypeIndex {
        self.first_index
    }

    pub fn is_strict(&self) -> bool {
        self.strict_leaves
    }
}
