use pdbtypes_core::ByteReader;

use crate::decode::DecodeError;
use crate::deps::DependencyStack;
use crate::index::{CategoryIndex, TypeIndex};
use crate::render::{Bind, Rendered, Renderer};
use crate::table::TableError;

use super::parse_reference;

/// Upper bound on the argument vector reserved before any argument is read.
const MAX_PREALLOCATED_ARGS: usize = 64;

/// `LF_PROCEDURE`: a free function signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Procedure {
    pub return_type: TypeIndex,
    pub calling_convention: u8,
    pub attributes: u8,
    pub param_count: u16,
    pub arg_list: TypeIndex,
}

impl Procedure {
    pub(crate) fn parse(
        reader: &mut ByteReader<'_>,
        deps: &mut DependencyStack,
    ) -> Result<Self, DecodeError> {
        let return_type = parse_reference(reader, deps)?;
        let calling_convention = reader.read_u8("calling convention")?;
        let attributes = reader.read_u8("function attributes")?;
        let param_count = reader.read_u16("parameter count")?;
        let arg_list = parse_reference(reader, deps)?;
        deps.pop();
        deps.pop();
        Ok(Self {
            return_type,
            calling_convention,
            attributes,
            param_count,
            arg_list,
        })
    }

    /// `ret (args)`, parenthesized when something tighter wraps it.
    pub(crate) fn render(&self, r: &mut Renderer<'_>, bind: Bind) -> Result<Rendered, TableError> {
        let ret = r.child(self.return_type, Bind::Plain)?;
        let args = r.child(self.arg_list, Bind::Plain)?;
        Ok(signature(format!("{} ({})", ret.text, args.text), bind))
    }
}

/// `LF_MFUNCTION`: a member function signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemberFunction {
    pub return_type: TypeIndex,
    pub class: TypeIndex,
    pub this: TypeIndex,
    pub calling_convention: u8,
    pub attributes: u8,
    pub param_count: u16,
    pub arg_list: TypeIndex,
    pub this_adjust: i32,
}

impl MemberFunction {
    pub(crate) fn parse(
        reader: &mut ByteReader<'_>,
        deps: &mut DependencyStack,
    ) -> Result<Self, DecodeError> {
        let return_type = parse_reference(reader, deps)?;
        let class = parse_reference(reader, deps)?;
        let this = parse_reference(reader, deps)?;
        let calling_convention = reader.read_u8("calling convention")?;
        let attributes = reader.read_u8("function attributes")?;
        let param_count = reader.read_u16("parameter count")?;
        let arg_list = parse_reference(reader, deps)?;
        let this_adjust = reader.read_i32("this adjustment")?;
        for _ in 0..4 {
            deps.pop();
        }
        Ok(Self {
            return_type,
            class,
            this,
            calling_convention,
            attributes,
            param_count,
            arg_list,
            this_adjust,
        })
    }

    /// Static member functions have no `this`.
    pub fn is_static(&self) -> bool {
        self.this == TypeIndex::NO_TYPE
    }

    pub(crate) fn render(&self, r: &mut Renderer<'_>, bind: Bind) -> Result<Rendered, TableError> {
        let ret = r.child(self.return_type, Bind::Plain)?;
        let class = r.scope_name(self.class)?;
        let args = r.child(self.arg_list, Bind::Plain)?;
        Ok(signature(format!("{} {class}::({})", ret.text, args.text), bind))
    }
}

fn signature(text: String, bind: Bind) -> Rendered {
    if bind < Bind::Proc {
        Rendered::plain(format!("({text})"))
    } else {
        Rendered::new(text, Bind::Proc)
    }
}

/// `LF_ARGLIST`: parameter types of a procedure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgList {
    pub args: Vec<TypeIndex>,
}

impl ArgList {
    pub(crate) fn parse(
        reader: &mut ByteReader<'_>,
        deps: &mut DependencyStack,
    ) -> Result<Self, DecodeError> {
        let count = reader.read_u32("argument count")? as usize;
        let mut args = Vec::with_capacity(count.min(MAX_PREALLOCATED_ARGS));
        for _ in 0..count {
            let arg = TypeIndex::parse32(reader)?;
            deps.push(CategoryIndex::data(arg));
            args.push(arg);
        }
        for _ in 0..count {
            deps.pop();
        }
        Ok(Self { args })
    }

    /// Comma-separated parameters. An empty list is `void`; a trailing
    /// `T_NOTYPE` marks a variadic tail.
    pub(crate) fn render(&self, r: &mut Renderer<'_>, _bind: Bind) -> Result<Rendered, TableError> {
        if self.args.is_empty() {
            return Ok(Rendered::plain("void".to_string()));
        }
        let mut params = Vec::with_capacity(self.args.len());
        for &arg in &self.args {
            if arg == TypeIndex::NO_TYPE {
                params.push("...".to_string());
            } else {
                params.push(r.child(arg, Bind::Plain)?.text);
            }
        }
        Ok(Rendered::plain(params.join(", ")))
    }
}
