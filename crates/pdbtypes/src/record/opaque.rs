//! Records kept as raw payload.

use pdbtypes_core::ByteReader;

use crate::leaf::{LeafKind, leaf_name};
use crate::render::Rendered;

/// `LF_LIST`: an untyped list whose payload is not interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct List {
    pub data: Vec<u8>,
}

impl List {
    pub(crate) fn parse(reader: &mut ByteReader<'_>) -> Self {
        Self {
            data: reader.read_remaining().to_vec(),
        }
    }

    pub(crate) fn render(&self) -> Rendered {
        opaque(LeafKind::List.name(), &self.data)
    }
}

/// A leaf this crate does not model. The tag and bytes are preserved so the
/// record still occupies its index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unsupported {
    pub leaf: u16,
    pub data: Vec<u8>,
}

impl Unsupported {
    pub(crate) fn parse(leaf: u16, reader: &mut ByteReader<'_>) -> Self {
        Self {
            leaf,
            data: reader.read_remaining().to_vec(),
        }
    }

    pub fn tag_name(&self) -> &'static str {
        leaf_name(self.leaf).unwrap_or("LF_UNKNOWN")
    }

    pub(crate) fn render(&self) -> Rendered {
        opaque(self.tag_name(), &self.data)
    }
}

fn opaque(name: &str, data: &[u8]) -> Rendered {
    Rendered::plain(format!("<<{name} dataLength={}>>", data.len()))
}
