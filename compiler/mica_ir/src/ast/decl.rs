//! Declaration nodes.

use super::{Block, Ident};
use crate::TypeDesc;

/// Declaration kinds.
#[derive(Clone, Debug)]
pub enum Decl {
    Var(VarDecl),
    Fn(FnDecl),
    Struct(StructDecl),
}

/// A declared type for a variable or struct field.
#[derive(Clone, Debug)]
pub enum TypeSpec {
    Int,
    Bool,
    Void,
    /// A reference to a declared struct type. The identifier is the
    /// type-name occurrence, bound when the reference validates.
    Struct(Ident),
}

/// A primitive type, as written on formals and function returns.
///
/// Formals get their own type category because the language has no
/// mechanism to pass structs as parameters; keeping `TypeSpec::Struct`
/// unrepresentable here encodes that structurally.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimType {
    Int,
    Bool,
    Void,
}

impl From<PrimType> for TypeDesc {
    fn from(ty: PrimType) -> Self {
        match ty {
            PrimType::Int => TypeDesc::Int,
            PrimType::Bool => TypeDesc::Bool,
            PrimType::Void => TypeDesc::Void,
        }
    }
}

/// A variable declaration: also used for struct fields and the local
/// declarations at the head of a block.
#[derive(Clone, Debug)]
pub struct VarDecl {
    pub ty: TypeSpec,
    pub name: Ident,
}

/// A function declaration.
#[derive(Clone, Debug)]
pub struct FnDecl {
    pub ret: PrimType,
    pub name: Ident,
    pub formals: Vec<FormalDecl>,
    pub body: Block,
}

/// A formal parameter.
#[derive(Clone, Debug)]
pub struct FormalDecl {
    pub ty: PrimType,
    pub name: Ident,
}

/// A struct type declaration with its field list.
#[derive(Clone, Debug)]
pub struct StructDecl {
    pub name: Ident,
    pub fields: Vec<VarDecl>,
}
