use pdbtypes_core::ByteReader;

use crate::decode::DecodeError;
use crate::deps::DependencyStack;
use crate::index::{CategoryIndex, TypeIndex};
use crate::leaf::LeafKind;
use crate::render::{Bind, Rendered, Renderer};
use crate::table::TableError;

/// Friend function declaration (`LF_FRIENDFCN` and its older forms).
///
/// Standalone records and field-list entries share this layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FriendFunction {
    pub leaf: LeafKind,
    pub friend: TypeIndex,
    pub name: String,
}

impl FriendFunction {
    pub(crate) fn parse(
        leaf: LeafKind,
        reader: &mut ByteReader<'_>,
        deps: &mut DependencyStack,
    ) -> Result<Self, DecodeError> {
        let friend = match leaf {
            LeafKind::FriendFunction16 => TypeIndex::parse16(reader)?,
            _ => {
                reader.skip(2, "friend function padding")?;
                TypeIndex::parse32(reader)?
            }
        };
        deps.push(CategoryIndex::data(friend));

        let name = match leaf {
            LeafKind::FriendFunction => reader.read_null_terminated_string("friend function name")?,
            _ => reader.read_length_prefixed_string("friend function name")?,
        };
        deps.pop();

        Ok(Self { leaf, friend, name })
    }

    pub(crate) fn render(&self, r: &mut Renderer<'_>, _bind: Bind) -> Result<Rendered, TableError> {
        let friend = r.child(self.friend, Bind::Plain)?;
        Ok(Rendered::plain(format!("friend: {} {}", self.name, friend.text)))
    }
}
