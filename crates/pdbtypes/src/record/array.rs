use pdbtypes_core::ByteReader;

use crate::decode::DecodeError;
use crate::deps::DependencyStack;
use crate::index::{CategoryIndex, TypeIndex};
use crate::leaf::LeafKind;
use crate::numeric::Numeric;
use crate::render::{Bind, Rendered, Renderer};
use crate::table::TableError;

use super::parse_reference;

/// Array of unspecified length (`LF_BARRAY`, `LF_BARRAY_16t`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BasicArray {
    pub leaf: LeafKind,
    pub element: TypeIndex,
}

impl BasicArray {
    pub(crate) fn parse(
        leaf: LeafKind,
        reader: &mut ByteReader<'_>,
        deps: &mut DependencyStack,
    ) -> Result<Self, DecodeError> {
        let element = match leaf {
            LeafKind::BasicArray16 => TypeIndex::parse16(reader)?,
            _ => TypeIndex::parse32(reader)?,
        };
        deps.push(CategoryIndex::data(element));
        deps.pop();
        Ok(Self { leaf, element })
    }

    /// `elem[]`, or `(elem)[]` when the element binds looser than an array.
    ///
    /// The incoming bind is handed to the element unchanged.
    pub(crate) fn render(&self, r: &mut Renderer<'_>, bind: Bind) -> Result<Rendered, TableError> {
        let element = r.child(self.element, bind)?;
        let text = if element.precedence < Bind::Array {
            format!("({})[]", element.text)
        } else {
            format!("{}[]", element.text)
        };
        Ok(Rendered::new(text, Bind::Array))
    }
}

/// Sized array (`LF_ARRAY`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Array {
    pub element: TypeIndex,
    pub index_type: TypeIndex,
    /// Total size in bytes.
    pub size: Numeric,
    pub name: String,
}

impl Array {
    pub(crate) fn parse(
        reader: &mut ByteReader<'_>,
        deps: &mut DependencyStack,
    ) -> Result<Self, DecodeError> {
        let element = parse_reference(reader, deps)?;
        let index_type = parse_reference(reader, deps)?;
        let size = Numeric::parse(reader)?;
        let name = reader.read_null_terminated_string("array name")?;
        deps.pop();
        deps.pop();
        Ok(Self {
            element,
            index_type,
            size,
            name,
        })
    }

    /// Element count when the element size is known, else the byte size.
    pub(crate) fn render(&self, r: &mut Renderer<'_>, bind: Bind) -> Result<Rendered, TableError> {
        let element = r.child(self.element, bind)?;
        let extent = match (self.size.as_u64(), r.table().size_of(self.element)) {
            (Some(bytes), Some(stride)) if stride > 0 && bytes % stride == 0 => {
                format!("[{}]", bytes / stride)
            }
            _ => format!("[size={}]", self.size),
        };
        let text = if element.precedence < Bind::Array {
            format!("({}){extent}", element.text)
        } else {
            format!("{}{extent}", element.text)
        };
        Ok(Rendered::new(text, Bind::Array))
    }
}
