//! Type stream decoding.
//!
//! A type stream is a sequence of `[len: u16][leaf: u16][payload]` records,
//! where `len` counts the leaf and payload. Records receive consecutive
//! indices starting at [`Config::first_index`]. A record that fails to decode
//! still consumes its index, so later indices stay correct; its slot is left
//! empty and the failure is reported alongside the table.

use pdbtypes_core::{ByteReader, ReadError};

use crate::config::Config;
use crate::deps::DependencyStack;
use crate::index::TypeIndex;
use crate::leaf::leaf_name;
use crate::record::Record;
use crate::table::{TableError, TypeTable};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed record: {0}")]
    MalformedData(#[from] ReadError),
    #[error("invalid numeric leaf {0:#06x}")]
    InvalidNumericLeaf(u16),
    #[error("unrecognized leaf {0:#06x}")]
    UnrecognizedLeaf(u16),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("type index space exhausted after {0}")]
    IndexSpaceExhausted(TypeIndex),
}

/// A record that could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordFailure {
    /// Index the record would have occupied. For
    /// [`DecodeError::IndexSpaceExhausted`], the last index handed out.
    pub index: TypeIndex,
    /// Byte offset of the record's length prefix within the stream.
    pub offset: usize,
    /// Leaf tag, when the record was long enough to carry one.
    pub leaf: Option<u16>,
    pub error: DecodeError,
}

/// Result of decoding a whole stream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    pub table: TypeTable,
    pub failures: Vec<RecordFailure>,
}

/// Decode one record payload into `table` at `index`.
///
/// On failure the table is unchanged and the dependency stack is back at the
/// depth it had on entry.
pub fn decode_record(
    table: &mut TypeTable,
    deps: &mut DependencyStack,
    index: TypeIndex,
    leaf: u16,
    payload: &[u8],
    config: &Config,
) -> Result<(), DecodeError> {
    if table.contains(index) {
        return Err(TableError::DuplicateIndex(index).into());
    }
    deps.take_journal();
    let mut reader = ByteReader::new(payload);
    let record = Record::parse(leaf, &mut reader, deps, config)?;
    if record.leaf().is_none() {
        if leaf_name(leaf).is_some() {
            let leaf = record.tag_name();
            tracing::debug!(%index, leaf, "keeping unmodelled record as raw bytes");
        } else {
            tracing::warn!(%index, leaf, "unknown leaf kept as raw bytes");
        }
    }
    table.insert_with_dependencies(index, record, deps.take_journal())?;
    Ok(())
}

/// Decode every record in `bytes`.
///
/// A truncated length prefix or a body running past the end of the stream
/// ends decoding; that last record is reported as a failure. Decoding also
/// stops when records remain after index `u32::MAX` has been assigned.
pub fn decode_stream(bytes: &[u8], config: &Config) -> Decoded {
    let mut decoded = Decoded {
        table: TypeTable::with_first_index(config.first_index),
        failures: Vec::new(),
    };
    let mut deps = DependencyStack::new();
    let mut reader = ByteReader::new(bytes);
    let mut index = config.first_index;

    while !reader.is_empty() {
        let offset = reader.position();
        let frame = match read_frame(&mut reader) {
            Ok(frame) => frame,
            Err(error) => {
                tracing::warn!(%index, offset, %error, "type stream truncated");
                decoded.failures.push(RecordFailure {
                    index,
                    offset,
                    leaf: None,
                    error: error.into(),
                });
                break;
            }
        };

        let (leaf, result) = match frame {
            Frame::Record { leaf, payload } => (
                Some(leaf),
                decode_record(&mut decoded.table, &mut deps, index, leaf, payload, config),
            ),
            Frame::Headless(error) => (None, Err(error.into())),
        };
        match result {
            Ok(()) => tracing::debug!(%index, ?leaf, "decoded record"),
            Err(error) => {
                tracing::warn!(%index, offset, ?leaf, %error, "record failed to decode");
                decoded.failures.push(RecordFailure {
                    index,
                    offset,
                    leaf,
                    error,
                });
            }
        }
        index = match index.next() {
            Some(next) => next,
            None => {
                if !reader.is_empty() {
                    let offset = reader.position();
                    tracing::warn!(%index, offset, "type index space exhausted");
                    decoded.failures.push(RecordFailure {
                        index,
                        offset,
                        leaf: None,
                        error: DecodeError::IndexSpaceExhausted(index),
                    });
                }
                break;
            }
        };
    }

    debug_assert!(deps.is_empty());
    decoded
}

enum Frame<'a> {
    Record { leaf: u16, payload: &'a [u8] },
    /// Length prefix shorter than a leaf tag. The frame is consumed.
    Headless(ReadError),
}

/// Read one `[len][leaf][payload]` frame. Errors mean the stream itself ran
/// out, not just the record.
fn read_frame<'a>(reader: &mut ByteReader<'a>) -> Result<Frame<'a>, ReadError> {
    let len = reader.read_u16("record length")? as usize;
    let mut body = reader.sub_reader(len, "record body")?;
    let frame = match body.read_u16("record leaf") {
        Ok(leaf) => Frame::Record {
            leaf,
            payload: body.read_remaining(),
        },
        Err(error) => Frame::Headless(error),
    };
    Ok(frame)
}
