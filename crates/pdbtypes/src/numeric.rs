//! CodeView numeric leaves.
//!
//! Sizes, offsets and enumerator values are stored as a `u16` that is either
//! the value itself (below `0x8000`) or a leaf selecting a wider payload.

use std::fmt;

use pdbtypes_core::ByteReader;

use crate::decode::DecodeError;

const LF_NUMERIC: u16 = 0x8000;
const LF_CHAR: u16 = 0x8000;
const LF_SHORT: u16 = 0x8001;
const LF_USHORT: u16 = 0x8002;
const LF_LONG: u16 = 0x8003;
const LF_ULONG: u16 = 0x8004;
const LF_QUADWORD: u16 = 0x8009;
const LF_UQUADWORD: u16 = 0x800a;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Numeric {
    Signed(i64),
    Unsigned(u64),
}

impl Numeric {
    pub fn parse(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        let leaf = reader.read_u16("numeric leaf")?;
        if leaf < LF_NUMERIC {
            return Ok(Self::Unsigned(leaf as u64));
        }
        let value = match leaf {
            LF_CHAR => Self::Signed(reader.read_i8("numeric value")? as i64),
            LF_SHORT => Self::Signed(reader.read_i16("numeric value")? as i64),
            LF_USHORT => Self::Unsigned(reader.read_u16("numeric value")? as u64),
            LF_LONG => Self::Signed(reader.read_i32("numeric value")? as i64),
            LF_ULONG => Self::Unsigned(reader.read_u32("numeric value")? as u64),
            LF_QUADWORD => Self::Signed(reader.read_i64("numeric value")?),
            LF_UQUADWORD => Self::Unsigned(reader.read_u64("numeric value")?),
            other => return Err(DecodeError::InvalidNumericLeaf(other)),
        };
        Ok(value)
    }

    /// The value as an unsigned quantity, `None` if negative.
    pub fn as_u64(self) -> Option<u64> {
        match self {
            Self::Unsigned(v) => Some(v),
            Self::Signed(v) => u64::try_from(v).ok(),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
        }
    }
}
