//! Type record descriptors.
//!
//! [`Record`] is a closed sum over every leaf this crate decodes, plus an
//! [`Unsupported`] catch-all that keeps the raw tag and payload. Each variant
//! owns its decode routine (`parse`) and its declarator routine (`render`).

mod array;
mod composite;
mod field_list;
mod friend;
mod opaque;
mod pointer;
mod procedure;


pub use array::{Array, BasicArray};
pub use composite::{Composite, Enumeration, Property};
pub use field_list::{Bitfield, Field, FieldList};
pub use friend::FriendFunction;
pub use opaque::{List, Unsupported};
pub use pointer::{MemberPointer, Modifier, Pointer, PointerAttributes, PointerMode};
pub use procedure::{ArgList, MemberFunction, Procedure};

use pdbtypes_core::ByteReader;

use crate::config::Config;
use crate::decode::DecodeError;
use crate::deps::DependencyStack;
use crate::index::{CategoryIndex, TypeIndex};
use crate::leaf::LeafKind;

/// A decoded type record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Modifier(Modifier),
    Pointer(Pointer),
    Procedure(Procedure),
    MemberFunction(MemberFunction),
    ArgList(ArgList),
    FieldList(FieldList),
    Bitfield(Bitfield),
    BasicArray(BasicArray),
    Array(Array),
    Composite(Composite),
    Enum(Enumeration),
    FriendFunction(FriendFunction),
    List(List),
    Unsupported(Unsupported),
}

impl Record {
    /// Decode the payload of a record whose leaf tag has already been read.
    ///
    /// Every dependency obligation pushed by the variant decoder is popped
    /// before this returns, whether decoding succeeds or not.
    pub fn parse(
        leaf: u16,
        reader: &mut ByteReader<'_>,
        deps: &mut DependencyStack,
        config: &Config,
    ) -> Result<Self, DecodeError> {
        let base = deps.depth();
        let result = Self::dispatch(leaf, reader, deps, config);
        match result {
            Ok(_) => deps.ensure_balanced(base, leaf),
            Err(_) => deps.unwind_to(base),
        }
        result
    }

    fn dispatch(
        leaf: u16,
        reader: &mut ByteReader<'_>,
        deps: &mut DependencyStack,
        config: &Config,
    ) -> Result<Self, DecodeError> {
        let Some(kind) = LeafKind::from_u16(leaf) else {
            if config.is_strict() {
                return Err(DecodeError::UnrecognizedLeaf(leaf));
            }
            return Ok(Self::Unsupported(Unsupported::parse(leaf, reader)));
        };

        let record = match kind {
            LeafKind::BasicArray16 | LeafKind::BasicArray => {
                Self::BasicArray(BasicArray::parse(kind, reader, deps)?)
            }
            LeafKind::FriendFunction16 | LeafKind::FriendFunctionSt | LeafKind::FriendFunction => {
                Self::FriendFunction(FriendFunction::parse(kind, reader, deps)?)
            }
            LeafKind::List => Self::List(List::parse(reader)),
            LeafKind::Modifier => Self::Modifier(Modifier::parse(reader, deps)?),
            LeafKind::Pointer => Self::Pointer(Pointer::parse(reader, deps)?),
            LeafKind::Procedure => Self::Procedure(Procedure::parse(reader, deps)?),
            LeafKind::MemberFunction => Self::MemberFunction(MemberFunction::parse(reader, deps)?),
            LeafKind::ArgList => Self::ArgList(ArgList::parse(reader, deps)?),
            LeafKind::FieldList => Self::FieldList(FieldList::parse(reader, deps)?),
            LeafKind::Bitfield => Self::Bitfield(Bitfield::parse(reader, deps)?),
            LeafKind::Array => Self::Array(Array::parse(reader, deps)?),
            LeafKind::Class | LeafKind::Structure | LeafKind::Union => {
                Self::Composite(Composite::parse(kind, reader, deps)?)
            }
            LeafKind::Enum => Self::Enum(Enumeration::parse(reader, deps)?),
        };
        Ok(record)
    }

    /// Raw leaf tag this record was decoded from.
    pub fn tag(&self) -> u16 {
        match self {
            Self::Unsupported(u) => u.leaf,
            _ => self.leaf().map_or(0, LeafKind::tag),
        }
    }

    /// Decoded leaf kind, `None` for [`Unsupported`] records.
    pub fn leaf(&self) -> Option<LeafKind> {
        let kind = match self {
            Self::Modifier(_) => LeafKind::Modifier,
            Self::Pointer(_) => LeafKind::Pointer,
            Self::Procedure(_) => LeafKind::Procedure,
            Self::MemberFunction(_) => LeafKind::MemberFunction,
            Self::ArgList(_) => LeafKind::ArgList,
            Self::FieldList(_) => LeafKind::FieldList,
            Self::Bitfield(_) => LeafKind::Bitfield,
            Self::BasicArray(a) => a.leaf,
            Self::Array(_) => LeafKind::Array,
            Self::Composite(c) => c.leaf,
            Self::Enum(_) => LeafKind::Enum,
            Self::FriendFunction(f) => f.leaf,
            Self::List(_) => LeafKind::List,
            Self::Unsupported(_) => return None,
        };
        Some(kind)
    }

    /// Statically declared name used in diagnostics and dumps.
    pub fn tag_name(&self) -> &'static str {
        match self {
            Self::Unsupported(u) => u.tag_name(),
            _ => self.leaf().map_or("LF_UNKNOWN", LeafKind::name),
        }
    }
}

/// Read a 32-bit index and open a `data` obligation for it.
fn parse_reference(
    reader: &mut ByteReader<'_>,
    deps: &mut DependencyStack,
) -> Result<TypeIndex, DecodeError> {
    let index = TypeIndex::parse32(reader)?;
    deps.push(CategoryIndex::data(index));
    Ok(index)
}
