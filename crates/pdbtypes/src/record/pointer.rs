use pdbtypes_core::ByteReader;

use crate::decode::DecodeError;
use crate::deps::DependencyStack;
use crate::index::TypeIndex;
use crate::render::{Bind, Rendered, Renderer};
use crate::table::TableError;

use super::parse_reference;

/// How a pointer refers to its target, from bits 5-7 of the attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerMode {
    Pointer,
    LValueReference,
    DataMember,
    MemberFunction,
    RValueReference,
    Reserved(u8),
}

impl PointerMode {
    fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::Pointer,
            1 => Self::LValueReference,
            2 => Self::DataMember,
            3 => Self::MemberFunction,
            4 => Self::RValueReference,
            other => Self::Reserved(other),
        }
    }

    /// Pointer-to-member forms carry a containing class after the attributes.
    pub fn is_member_pointer(self) -> bool {
        matches!(self, Self::DataMember | Self::MemberFunction)
    }
}

/// Packed `LF_POINTER` attribute word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerAttributes(pub u32);

impl PointerAttributes {
    /// Addressing kind (near, far, 64-bit, ...), bits 0-4.
    pub fn kind(self) -> u8 {
        (self.0 & 0x1f) as u8
    }

    pub fn mode(self) -> PointerMode {
        PointerMode::from_bits(((self.0 >> 5) & 0x7) as u8)
    }

    pub fn is_flat32(self) -> bool {
        self.0 & (1 << 8) != 0
    }

    pub fn is_volatile(self) -> bool {
        self.0 & (1 << 9) != 0
    }

    pub fn is_const(self) -> bool {
        self.0 & (1 << 10) != 0
    }

    pub fn is_unaligned(self) -> bool {
        self.0 & (1 << 11) != 0
    }

    pub fn is_restrict(self) -> bool {
        self.0 & (1 << 12) != 0
    }

    /// Pointer width in bytes, bits 13-18. Zero when the producer left it out.
    pub fn size(self) -> u8 {
        ((self.0 >> 13) & 0x3f) as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemberPointer {
    pub containing_class: TypeIndex,
    pub format: u16,
}

/// `LF_POINTER`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pointer {
    pub underlying: TypeIndex,
    pub attributes: PointerAttributes,
    pub member: Option<MemberPointer>,
}

impl Pointer {
    pub(crate) fn parse(
        reader: &mut ByteReader<'_>,
        deps: &mut DependencyStack,
    ) -> Result<Self, DecodeError> {
        let underlying = parse_reference(reader, deps)?;
        let attributes = PointerAttributes(reader.read_u32("pointer attributes")?);

        let member = if attributes.mode().is_member_pointer() {
            let containing_class = parse_reference(reader, deps)?;
            let format = reader.read_u16("member pointer format")?;
            deps.pop();
            Some(MemberPointer {
                containing_class,
                format,
            })
        } else {
            None
        };
        deps.pop();

        Ok(Self {
            underlying,
            attributes,
            member,
        })
    }

    pub(crate) fn render(&self, r: &mut Renderer<'_>, _bind: Bind) -> Result<Rendered, TableError> {
        let mut text = r.child(self.underlying, Bind::Ptr)?.text;
        match (self.attributes.mode(), self.member) {
            (PointerMode::LValueReference, _) => text.push('&'),
            (PointerMode::RValueReference, _) => text.push_str("&&"),
            (_, Some(member)) => {
                let scope = r.scope_name(member.containing_class)?;
                text.push(' ');
                text.push_str(&scope);
                text.push_str("::*");
            }
            _ => text.push('*'),
        }
        if self.attributes.is_const() {
            text.push_str(" const");
        }
        if self.attributes.is_volatile() {
            text.push_str(" volatile");
        }
        Ok(Rendered::new(text, Bind::Ptr))
    }
}

/// `LF_MODIFIER`: cv-qualified view of another type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Modifier {
    pub modified: TypeIndex,
    pub attributes: u16,
}

impl Modifier {
    const CONST: u16 = 0x1;
    const VOLATILE: u16 = 0x2;
    const UNALIGNED: u16 = 0x4;

    pub(crate) fn parse(
        reader: &mut ByteReader<'_>,
        deps: &mut DependencyStack,
    ) -> Result<Self, DecodeError> {
        let modified = parse_reference(reader, deps)?;
        let attributes = reader.read_u16("modifier attributes")?;
        deps.pop();
        Ok(Self {
            modified,
            attributes,
        })
    }

    pub fn is_const(&self) -> bool {
        self.attributes & Self::CONST != 0
    }

    pub fn is_volatile(&self) -> bool {
        self.attributes & Self::VOLATILE != 0
    }

    pub fn is_unaligned(&self) -> bool {
        self.attributes & Self::UNALIGNED != 0
    }

    fn qualifiers(&self) -> Vec<&'static str> {
        let mut quals = Vec::new();
        if self.is_const() {
            quals.push("const");
        }
        if self.is_volatile() {
            quals.push("volatile");
        }
        if self.is_unaligned() {
            quals.push("__unaligned");
        }
        quals
    }

    /// `const int`, or `int* const` when the target is a pointer.
    ///
    /// The modifier takes on its target's precedence.
    pub(crate) fn render(&self, r: &mut Renderer<'_>, bind: Bind) -> Result<Rendered, TableError> {
        let target = r.child(self.modified, bind)?;
        let quals = self.qualifiers();
        if quals.is_empty() {
            return Ok(target);
        }
        let quals = quals.join(" ");
        let text = if target.precedence == Bind::Ptr {
            format!("{} {quals}", target.text)
        } else {
            format!("{quals} {}", target.text)
        };
        Ok(Rendered::new(text, target.precedence))
    }
}
