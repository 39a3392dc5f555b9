//! pdbtypes: CodeView type record decoding with declarator rendering.
//!
//! Records from a PDB type stream are decoded into a [`TypeTable`] keyed by
//! [`TypeIndex`]. Records refer to one another only by index, so forward
//! references and cycles are ordinary data. Rendering resolves indices on
//! demand and produces C-like declarator text with correct parenthesization.
//!
//! # Example
//!
//! ```
//! use pdbtypes::{Config, TypeIndex, decode_stream};
//!
//! // LF_POINTER to int, then LF_BARRAY of that pointer.
//! let stream = [
//!     0x0a, 0x00, 0x02, 0x10, 0x74, 0x00, 0x00, 0x00, 0x0c, 0x00, 0x01, 0x00,
//!     0x06, 0x00, 0x07, 0x12, 0x00, 0x10, 0x00, 0x00,
//! ];
//! let decoded = decode_stream(&stream, &Config::default());
//! assert!(decoded.failures.is_empty());
//! assert_eq!(decoded.table.render(TypeIndex(0x1001)).unwrap(), "(int*)[]");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
mod decode;
mod deps;
mod dump;
mod index;
mod invariants;
mod leaf;
mod numeric;
mod primitive;
pub mod record;
pub mod render;
mod table;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod decode_tests;

pub use config::Config;
pub use decode::{DecodeError, Decoded, RecordFailure, decode_record, decode_stream};
pub use deps::DependencyStack;
pub use dump::dump;
pub use index::{Category, CategoryIndex, FIRST_RECORD_INDEX, TypeIndex};
pub use leaf::{LeafKind, leaf_name, sub};
pub use numeric::Numeric;
pub use primitive::{Primitive, PrimitiveMode};
pub use record::{
    ArgList, Array, BasicArray, Bitfield, Composite, Enumeration, Field, FieldList,
    FriendFunction, List, MemberFunction, MemberPointer, Modifier, Pointer, PointerAttributes,
    PointerMode, Procedure, Property, Record, Unsupported,
};
pub use render::{Bind, Rendered, Renderer, render, render_index};
pub use table::{TableError, TypeTable};

pub use pdbtypes_core::{ByteReader, Colors, ReadError};
