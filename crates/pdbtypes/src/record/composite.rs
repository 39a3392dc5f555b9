use pdbtypes_core::ByteReader;

use crate::decode::DecodeError;
use crate::deps::DependencyStack;
use crate::index::TypeIndex;
use crate::leaf::LeafKind;
use crate::numeric::Numeric;
use crate::render::Rendered;

use super::parse_reference;

/// Property word shared by classes, structures, unions and enums.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Property(pub u16);

impl Property {
    pub const PACKED: u16 = 0x0001;
    pub const NESTED: u16 = 0x0008;
    pub const FORWARD_REF: u16 = 0x0080;
    pub const SCOPED: u16 = 0x0100;
    pub const HAS_UNIQUE_NAME: u16 = 0x0200;
    pub const SEALED: u16 = 0x0400;

    pub fn contains(self, flag: u16) -> bool {
        self.0 & flag != 0
    }

    /// Declared but not defined here; the definition lives under the same name.
    pub fn is_forward_ref(self) -> bool {
        self.contains(Self::FORWARD_REF)
    }

    pub fn has_unique_name(self) -> bool {
        self.contains(Self::HAS_UNIQUE_NAME)
    }
}

/// `LF_CLASS`, `LF_STRUCTURE` or `LF_UNION`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Composite {
    pub leaf: LeafKind,
    pub count: u16,
    pub property: Property,
    pub field_list: TypeIndex,
    /// Derivation list; always `T_NOTYPE` for unions.
    pub derived: TypeIndex,
    /// Virtual table shape; always `T_NOTYPE` for unions.
    pub vshape: TypeIndex,
    pub size: Numeric,
    pub name: String,
    pub unique_name: Option<String>,
}

impl Composite {
    pub(crate) fn parse(
        leaf: LeafKind,
        reader: &mut ByteReader<'_>,
        deps: &mut DependencyStack,
    ) -> Result<Self, DecodeError> {
        let count = reader.read_u16("member count")?;
        let property = Property(reader.read_u16("type properties")?);
        let field_list = parse_reference(reader, deps)?;
        let mut pushed = 1;

        let (derived, vshape) = if leaf == LeafKind::Union {
            (TypeIndex::NO_TYPE, TypeIndex::NO_TYPE)
        } else {
            let derived = parse_reference(reader, deps)?;
            let vshape = parse_reference(reader, deps)?;
            pushed += 2;
            (derived, vshape)
        };

        let size = Numeric::parse(reader)?;
        let name = reader.read_null_terminated_string("type name")?;
        let unique_name = read_unique_name(reader, property)?;
        for _ in 0..pushed {
            deps.pop();
        }

        Ok(Self {
            leaf,
            count,
            property,
            field_list,
            derived,
            vshape,
            size,
            name,
            unique_name,
        })
    }

    /// C keyword introducing this aggregate.
    pub fn keyword(&self) -> &'static str {
        match self.leaf {
            LeafKind::Class => "class",
            LeafKind::Union => "union",
            _ => "struct",
        }
    }

    pub(crate) fn render(&self) -> Rendered {
        Rendered::plain(format!("{} {}", self.keyword(), self.name))
    }
}

/// `LF_ENUM`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enumeration {
    pub count: u16,
    pub property: Property,
    pub underlying: TypeIndex,
    pub field_list: TypeIndex,
    pub name: String,
    pub unique_name: Option<String>,
}

impl Enumeration {
    pub(crate) fn parse(
        reader: &mut ByteReader<'_>,
        deps: &mut DependencyStack,
    ) -> Result<Self, DecodeError> {
        let count = reader.read_u16("enumerator count")?;
        let property = Property(reader.read_u16("type properties")?);
        let underlying = parse_reference(reader, deps)?;
        let field_list = parse_reference(reader, deps)?;
        let name = reader.read_null_terminated_string("enum name")?;
        let unique_name = read_unique_name(reader, property)?;
        deps.pop();
        deps.pop();

        Ok(Self {
            count,
            property,
            underlying,
            field_list,
            name,
            unique_name,
        })
    }

    pub(crate) fn render(&self) -> Rendered {
        Rendered::plain(format!("enum {}", self.name))
    }
}

fn read_unique_name(
    reader: &mut ByteReader<'_>,
    property: Property,
) -> Result<Option<String>, DecodeError> {
    if !property.has_unique_name() {
        return Ok(None);
    }
    Ok(Some(reader.read_null_terminated_string("unique name")?))
}
