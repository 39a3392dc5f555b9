//! Built-in CodeView primitive types.
//!
//! Indices below [`FIRST_RECORD_INDEX`](crate::index::FIRST_RECORD_INDEX) are
//! not records: bits 0-7 select a base type and bits 8-11 a pointer mode.

use crate::index::TypeIndex;

/// Pointer mode encoded in bits 8-11 of a primitive index.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PrimitiveMode {
    Direct,
    Near16,
    Far16,
    Huge16,
    Near32,
    Far32,
    Near64,
    Near128,
}

impl PrimitiveMode {
    fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0 => Some(Self::Direct),
            1 => Some(Self::Near16),
            2 => Some(Self::Far16),
            3 => Some(Self::Huge16),
            4 => Some(Self::Near32),
            5 => Some(Self::Far32),
            6 => Some(Self::Near64),
            7 => Some(Self::Near128),
            _ => None,
        }
    }

    /// Pointer width in bytes, `None` for direct values.
    pub fn pointer_size(self) -> Option<u64> {
        match self {
            Self::Direct => None,
            Self::Near16 => Some(2),
            Self::Far16 | Self::Huge16 | Self::Near32 => Some(4),
            Self::Far32 => Some(6),
            Self::Near64 => Some(8),
            Self::Near128 => Some(16),
        }
    }
}

/// A decoded primitive type index.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Primitive {
    index: TypeIndex,
}

impl Primitive {
    /// Interpret a primitive index. Returns `None` for record indices.
    pub fn from_index(index: TypeIndex) -> Option<Self> {
        index.is_primitive().then_some(Self { index })
    }

    pub fn index(self) -> TypeIndex {
        self.index
    }

    fn base(self) -> u32 {
        self.index.0 & 0xff
    }

    /// Pointer mode, `None` when bits 8-11 hold a reserved value.
    pub fn mode(self) -> Option<PrimitiveMode> {
        PrimitiveMode::from_bits((self.index.0 >> 8) & 0xf)
    }

    /// Reserved modes are not pointers; they render as a placeholder.
    pub fn is_pointer(self) -> bool {
        matches!(self.mode(), Some(mode) if mode != PrimitiveMode::Direct)
    }

    /// `T_NOTYPE`.
    pub fn is_no_type(self) -> bool {
        self.index == TypeIndex::NO_TYPE
    }

    /// C spelling of the base type, ignoring the pointer mode.
    pub fn base_name(self) -> Option<&'static str> {
        let name = match self.base() {
            0x00 => "<no type>",
            0x03 => "void",
            0x08 => "HRESULT",
            0x10 => "signed char",
            0x20 => "unsigned char",
            0x70 => "char",
            0x71 => "wchar_t",
            0x7a => "char16_t",
            0x7b => "char32_t",
            0x7c => "char8_t",
            0x68 => "__int8",
            0x69 => "unsigned __int8",
            0x11 => "short",
            0x21 => "unsigned short",
            0x72 => "__int16",
            0x73 => "unsigned __int16",
            0x12 => "long",
            0x22 => "unsigned long",
            0x74 => "int",
            0x75 => "unsigned int",
            0x13 | 0x76 => "__int64",
            0x23 | 0x77 => "unsigned __int64",
            0x78 => "__int128",
            0x79 => "unsigned __int128",
            0x40 => "float",
            0x41 => "double",
            0x42 => "long double",
            0x30 => "bool",
            _ => return None,
        };
        Some(name)
    }

    /// Size of the base value in bytes.
    fn base_size(self) -> Option<u64> {
        let size = match self.base() {
            0x10 | 0x20 | 0x70 | 0x68 | 0x69 | 0x30 | 0x7c => 1,
            0x11 | 0x21 | 0x72 | 0x73 | 0x71 | 0x7a => 2,
            0x12 | 0x22 | 0x74 | 0x75 | 0x40 | 0x7b | 0x08 => 4,
            0x13 | 0x23 | 0x76 | 0x77 | 0x41 => 8,
            0x42 => 10,
            0x78 | 0x79 => 16,
            _ => return None,
        };
        Some(size)
    }

    /// Size in bytes: the pointer width for pointer modes, else the base size.
    pub fn size(self) -> Option<u64> {
        match self.mode()? {
            PrimitiveMode::Direct => self.base_size(),
            mode => mode.pointer_size(),
        }
    }

    /// Declarator text, e.g. `int` or `unsigned char*`.
    pub fn render(self) -> String {
        match (self.base_name(), self.mode()) {
            (Some(name), Some(PrimitiveMode::Direct)) => name.to_string(),
            (Some(name), Some(_)) => format!("{name}*"),
            _ => format!("<<primitive {}>>", self.index),
        }
    }
}
