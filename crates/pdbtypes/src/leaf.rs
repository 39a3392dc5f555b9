//! CodeView leaf discriminators.
//!
//! Every type record starts with a `u16` leaf tag that selects its layout.
//! [`LeafKind`] covers the records this crate decodes structurally; anything
//! else is kept as an opaque [`Unsupported`](crate::record::Unsupported)
//! record and only named for diagnostics via [`leaf_name`].

/// Leaf tags with a structural decoder.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u16)]
pub enum LeafKind {
    /// Basic array, 16-bit element index.
    BasicArray16 = 0x000d,
    /// Opaque list.
    List = 0x0203,
    /// Friend function, 16-bit index and length-prefixed name.
    FriendFunction16 = 0x040c,
    Modifier = 0x1001,
    Pointer = 0x1002,
    Procedure = 0x1008,
    MemberFunction = 0x1009,
    ArgList = 0x1201,
    FieldList = 0x1203,
    Bitfield = 0x1205,
    /// Basic array, 32-bit element index.
    BasicArray = 0x1207,
    /// Friend function, 32-bit index and length-prefixed name.
    FriendFunctionSt = 0x1403,
    Array = 0x1503,
    Class = 0x1504,
    Structure = 0x1505,
    Union = 0x1506,
    Enum = 0x1507,
    /// Friend function, 32-bit index and null-terminated name.
    FriendFunction = 0x150c,
}

impl LeafKind {
    /// Every decodable leaf, for building dispatch tables.
    pub const ALL: [Self; 18] = [
        Self::BasicArray16,
        Self::List,
        Self::FriendFunction16,
        Self::Modifier,
        Self::Pointer,
        Self::Procedure,
        Self::MemberFunction,
        Self::ArgList,
        Self::FieldList,
        Self::Bitfield,
        Self::BasicArray,
        Self::FriendFunctionSt,
        Self::Array,
        Self::Class,
        Self::Structure,
        Self::Union,
        Self::Enum,
        Self::FriendFunction,
    ];

    /// Convert from the raw tag.
    pub fn from_u16(v: u16) -> Option<Self> {
        match v {
            0x000d => Some(Self::BasicArray16),
            0x0203 => Some(Self::List),
            0x040c => Some(Self::FriendFunction16),
            0x1001 => Some(Self::Modifier),
            0x1002 => Some(Self::Pointer),
            0x1008 => Some(Self::Procedure),
            0x1009 => Some(Self::MemberFunction),
            0x1201 => Some(Self::ArgList),
            0x1203 => Some(Self::FieldList),
            0x1205 => Some(Self::Bitfield),
            0x1207 => Some(Self::BasicArray),
            0x1403 => Some(Self::FriendFunctionSt),
            0x1503 => Some(Self::Array),
            0x1504 => Some(Self::Class),
            0x1505 => Some(Self::Structure),
            0x1506 => Some(Self::Union),
            0x1507 => Some(Self::Enum),
            0x150c => Some(Self::FriendFunction),
            _ => None,
        }
    }

    #[inline]
    pub fn tag(self) -> u16 {
        self as u16
    }

    /// CodeView constant name.
    pub fn name(self) -> &'static str {
        match self {
            Self::BasicArray16 => "LF_BARRAY_16t",
            Self::List => "LF_LIST",
            Self::FriendFunction16 => "LF_FRIENDFCN_16t",
            Self::Modifier => "LF_MODIFIER",
            Self::Pointer => "LF_POINTER",
            Self::Procedure => "LF_PROCEDURE",
            Self::MemberFunction => "LF_MFUNCTION",
            Self::ArgList => "LF_ARGLIST",
            Self::FieldList => "LF_FIELDLIST",
            Self::Bitfield => "LF_BITFIELD",
            Self::BasicArray => "LF_BARRAY",
            Self::FriendFunctionSt => "LF_FRIENDFCN_ST",
            Self::Array => "LF_ARRAY",
            Self::Class => "LF_CLASS",
            Self::Structure => "LF_STRUCTURE",
            Self::Union => "LF_UNION",
            Self::Enum => "LF_ENUM",
            Self::FriendFunction => "LF_FRIENDFCN",
        }
    }
}

/// Field-list sub-record tags.
pub mod sub {
    pub const BASE_CLASS: u16 = 0x1400;
    pub const ENUMERATE: u16 = 0x1502;
    pub const FRIEND_FUNCTION: u16 = 0x150c;
    pub const MEMBER: u16 = 0x150d;
    pub const NESTED_TYPE: u16 = 0x1510;
}

/// CodeView name for any leaf tag, including ones decoded only opaquely.
pub fn leaf_name(tag: u16) -> Option<&'static str> {
    if let Some(kind) = LeafKind::from_u16(tag) {
        return Some(kind.name());
    }
    let name = match tag {
        0x000a => "LF_VTSHAPE",
        0x000e => "LF_LABEL",
        0x0015 => "LF_NULL",
        0x1200 => "LF_SKIP",
        0x1202 => "LF_DEFARG",
        0x1206 => "LF_METHODLIST",
        0x1400 => "LF_BCLASS",
        0x1401 => "LF_VBCLASS",
        0x1402 => "LF_IVBCLASS",
        0x1404 => "LF_INDEX",
        0x1409 => "LF_VFUNCTAB",
        0x1502 => "LF_ENUMERATE",
        0x1508 => "LF_PRECOMP",
        0x150d => "LF_MEMBER",
        0x150e => "LF_STMEMBER",
        0x150f => "LF_METHOD",
        0x1510 => "LF_NESTTYPE",
        0x1511 => "LF_ONEMETHOD",
        0x1515 => "LF_TYPESERVER2",
        0x1519 => "LF_INTERFACE",
        0x151d => "LF_VFTABLE",
        0x1601 => "LF_FUNC_ID",
        0x1602 => "LF_MFUNC_ID",
        0x1603 => "LF_BUILDINFO",
        0x1604 => "LF_SUBSTR_LIST",
        0x1605 => "LF_STRING_ID",
        0x1606 => "LF_UDT_SRC_LINE",
        0x1607 => "LF_UDT_MOD_SRC_LINE",
        _ => return None,
    };
    Some(name)
}
