//! Byte builders for record and stream fixtures.

use crate::{Config, DecodeError, DependencyStack, Record, TypeIndex, TypeTable, decode_record};

/// Little-endian payload builder.
#[derive(Default)]
pub(crate) struct Payload {
    bytes: Vec<u8>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn u8(mut self, v: u8) -> Self {
        self.bytes.push(v);
        self
    }

    pub fn u16(mut self, v: u16) -> Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn u32(mut self, v: u32) -> Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn i32(mut self, v: i32) -> Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    /// 32-bit type index.
    pub fn ti(self, raw: u32) -> Self {
        self.u32(raw)
    }

    /// Null-terminated string.
    pub fn cstr(mut self, s: &str) -> Self {
        self.bytes.extend_from_slice(s.as_bytes());
        self.bytes.push(0);
        self
    }

    /// String with a one-byte length prefix.
    pub fn pstr(mut self, s: &str) -> Self {
        self.bytes.push(s.len() as u8);
        self.bytes.extend_from_slice(s.as_bytes());
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// Frame a payload as `[len][leaf][payload]`.
pub(crate) fn frame(leaf: u16, payload: &[u8]) -> Vec<u8> {
    let len = (payload.len() + 2) as u16;
    let mut out = Vec::with_capacity(payload.len() + 4);
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&leaf.to_le_bytes());
    out.extend_from_slice(payload);
    out
}

/// Concatenate framed records into a stream.
pub(crate) fn stream(records: &[(u16, Vec<u8>)]) -> Vec<u8> {
    records
        .iter()
        .flat_map(|(leaf, payload)| frame(*leaf, payload))
        .collect()
}

/// Build a table from `(leaf, payload)` pairs numbered from `0x1000`.
pub(crate) fn table(records: &[(u16, Vec<u8>)]) -> TypeTable {
    let mut table = TypeTable::new();
    let mut deps = DependencyStack::new();
    let config = Config::default();
    let mut index = TypeIndex::FIRST_RECORD;
    for (leaf, payload) in records {
        decode_record(&mut table, &mut deps, index, *leaf, payload, &config).unwrap();
        index = index.next().unwrap();
    }
    table
}

/// Decode a single payload with a fresh stack, checking the stack ends empty.
pub(crate) fn parse(leaf: u16, payload: &[u8]) -> Result<Record, DecodeError> {
    parse_with(leaf, payload, &Config::default())
}

pub(crate) fn parse_with(
    leaf: u16,
    payload: &[u8],
    config: &Config,
) -> Result<Record, DecodeError> {
    let mut deps = DependencyStack::new();
    let mut reader = crate::ByteReader::new(payload);
    let result = Record::parse(leaf, &mut reader, &mut deps, config);
    assert!(deps.is_empty(), "stack not empty after {leaf:#06x}");
    result
}
