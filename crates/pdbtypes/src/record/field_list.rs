use pdbtypes_core::ByteReader;

use crate::decode::DecodeError;
use crate::deps::DependencyStack;
use crate::index::TypeIndex;
use crate::leaf::{LeafKind, sub};
use crate::numeric::Numeric;
use crate::render::{Bind, Rendered, Renderer};
use crate::table::TableError;

use super::FriendFunction;
use super::parse_reference;

/// One entry of a field list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Field {
    BaseClass {
        attributes: u16,
        base: TypeIndex,
        offset: Numeric,
    },
    Member {
        attributes: u16,
        field_type: TypeIndex,
        offset: Numeric,
        name: String,
    },
    Enumerate {
        attributes: u16,
        value: Numeric,
        name: String,
    },
    NestedType {
        nested: TypeIndex,
        name: String,
    },
    FriendFunction(FriendFunction),
}

impl Field {
    fn parse(
        subleaf: u16,
        reader: &mut ByteReader<'_>,
        deps: &mut DependencyStack,
    ) -> Result<Option<Self>, DecodeError> {
        let field = match subleaf {
            sub::BASE_CLASS => {
                let attributes = reader.read_u16("field attributes")?;
                let base = parse_reference(reader, deps)?;
                let offset = Numeric::parse(reader)?;
                deps.pop();
                Self::BaseClass {
                    attributes,
                    base,
                    offset,
                }
            }
            sub::MEMBER => {
                let attributes = reader.read_u16("field attributes")?;
                let field_type = parse_reference(reader, deps)?;
                let offset = Numeric::parse(reader)?;
                let name = reader.read_null_terminated_string("member name")?;
                deps.pop();
                Self::Member {
                    attributes,
                    field_type,
                    offset,
                    name,
                }
            }
            sub::ENUMERATE => {
                let attributes = reader.read_u16("field attributes")?;
                let value = Numeric::parse(reader)?;
                let name = reader.read_null_terminated_string("enumerator name")?;
                Self::Enumerate {
                    attributes,
                    value,
                    name,
                }
            }
            sub::NESTED_TYPE => {
                reader.skip(2, "nested type padding")?;
                let nested = parse_reference(reader, deps)?;
                let name = reader.read_null_terminated_string("nested type name")?;
                deps.pop();
                Self::NestedType { nested, name }
            }
            sub::FRIEND_FUNCTION => {
                Self::FriendFunction(FriendFunction::parse(LeafKind::FriendFunction, reader, deps)?)
            }
            _ => return Ok(None),
        };
        Ok(Some(field))
    }

    fn render(&self, r: &mut Renderer<'_>) -> Result<String, TableError> {
        let text = match self {
            Self::BaseClass { base, .. } => format!("base {}", r.child(*base, Bind::Plain)?.text),
            Self::Member {
                field_type, name, ..
            } => format!("{} {name}", r.child(*field_type, Bind::Plain)?.text),
            Self::Enumerate { value, name, .. } => format!("{name} = {value}"),
            Self::NestedType { nested, name } => {
                format!("nested {} {name}", r.child(*nested, Bind::Plain)?.text)
            }
            Self::FriendFunction(friend) => friend.render(r, Bind::Plain)?.text,
        };
        Ok(text)
    }
}

/// `LF_FIELDLIST`: members of a class, structure, union or enum.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FieldList {
    pub fields: Vec<Field>,
    /// Bytes left after the first sub-record this crate does not model.
    pub unparsed: usize,
}

impl FieldList {
    pub(crate) fn parse(
        reader: &mut ByteReader<'_>,
        deps: &mut DependencyStack,
    ) -> Result<Self, DecodeError> {
        let mut list = Self::default();
        loop {
            reader.skip_padding();
            if reader.is_empty() {
                break;
            }
            let start = reader.remaining();
            let subleaf = reader.read_u16("field sub-record")?;
            match Field::parse(subleaf, reader, deps)? {
                Some(field) => list.fields.push(field),
                None => {
                    tracing::debug!(subleaf, "stopping at unmodelled field sub-record");
                    list.unparsed = start;
                    reader.read_remaining();
                    break;
                }
            }
        }
        Ok(list)
    }

    /// `{ int x; char y }`, or `{}` when empty.
    pub(crate) fn render(&self, r: &mut Renderer<'_>, _bind: Bind) -> Result<Rendered, TableError> {
        let mut parts = Vec::with_capacity(self.fields.len() + 1);
        for field in &self.fields {
            parts.push(field.render(r)?);
        }
        if self.unparsed > 0 {
            parts.push(format!("<<unparsed {}>>", self.unparsed));
        }
        if parts.is_empty() {
            return Ok(Rendered::plain("{}".to_string()));
        }
        Ok(Rendered::plain(format!("{{ {} }}", parts.join("; "))))
    }
}

/// `LF_BITFIELD`: a run of bits within an integral base type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitfield {
    pub base: TypeIndex,
    pub length: u8,
    pub position: u8,
}

impl Bitfield {
    pub(crate) fn parse(
        reader: &mut ByteReader<'_>,
        deps: &mut DependencyStack,
    ) -> Result<Self, DecodeError> {
        let base = parse_reference(reader, deps)?;
        let length = reader.read_u8("bitfield length")?;
        let position = reader.read_u8("bitfield position")?;
        deps.pop();
        Ok(Self {
            base,
            length,
            position,
        })
    }

    pub(crate) fn render(&self, r: &mut Renderer<'_>, _bind: Bind) -> Result<Rendered, TableError> {
        let base = r.child(self.base, Bind::Plain)?;
        Ok(Rendered::plain(format!("{} : {}", base.text, self.length)))
    }
}
