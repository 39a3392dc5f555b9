//! Type index newtypes.

use std::fmt;

use pdbtypes_core::{ByteReader, ReadError};

/// First index assigned to a record in a CodeView type stream.
/// Everything below it is a built-in primitive.
pub const FIRST_RECORD_INDEX: u32 = 0x1000;

/// Key into the record table.
///
/// A type index is a weak reference: it names a record that may not have
/// been decoded yet, and is resolved through [`TypeTable`](crate::TypeTable).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(transparent)]
pub struct TypeIndex(pub u32);

impl TypeIndex {
    /// `T_NOTYPE`: no type, or a variadic tail inside an argument list.
    pub const NO_TYPE: Self = Self(0);
    pub const FIRST_RECORD: Self = Self(FIRST_RECORD_INDEX);

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Whether this index names a built-in primitive rather than a record.
    #[inline]
    pub fn is_primitive(self) -> bool {
        self.0 < FIRST_RECORD_INDEX
    }

    /// The index following this one in stream order, `None` past `u32::MAX`.
    #[inline]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Decode a 32-bit type index.
    pub fn parse32(reader: &mut ByteReader<'_>) -> Result<Self, ReadError> {
        reader.read_u32("type index").map(Self)
    }

    /// Decode a 16-bit type index, as used by the `_16t` record forms.
    pub fn parse16(reader: &mut ByteReader<'_>) -> Result<Self, ReadError> {
        reader.read_u16("16-bit type index").map(|v| Self(v as u32))
    }
}

impl fmt::Display for TypeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// Which index space a reference points into.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Category {
    /// Symbol records.
    Symbol,
    /// Type records (the TPI stream).
    Data,
    /// Id records (the IPI stream).
    Item,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::Data => "data",
            Self::Item => "item",
        }
    }
}

/// A type index tagged with the index space it belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CategoryIndex {
    pub category: Category,
    pub index: TypeIndex,
}

impl CategoryIndex {
    pub fn new(category: Category, index: TypeIndex) -> Self {
        Self { category, index }
    }

    /// Reference into the type record space.
    pub fn data(index: TypeIndex) -> Self {
        Self::new(Category::Data, index)
    }
}

impl fmt::Display for CategoryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category.as_str(), self.index)
    }
}
