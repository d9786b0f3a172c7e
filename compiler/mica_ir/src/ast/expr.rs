//! Expression nodes.

use super::{BinaryOp, Ident, UnaryOp};
use crate::{Name, SrcLoc};

/// Expression kinds.
#[derive(Clone, Debug)]
pub enum Expr {
    IntLit { loc: SrcLoc, value: i64 },
    StrLit { loc: SrcLoc, value: Name },
    True(SrcLoc),
    False(SrcLoc),
    Ident(Ident),
    Dot(Box<DotAccess>),
    Assign(Box<AssignExpr>),
    Call(Box<CallExpr>),
    Unary(Box<UnaryExpr>),
    Binary(Box<BinaryExpr>),
}

/// A field access `base.field`. Chains nest through `base`, so
/// `a.b.c` is `Dot(Dot(a, b), c)`.
#[derive(Clone, Debug)]
pub struct DotAccess {
    pub base: Expr,
    pub field: Ident,
}

/// An assignment `target = value`.
#[derive(Clone, Debug)]
pub struct AssignExpr {
    pub target: Expr,
    pub value: Expr,
}

/// A call `callee(args...)`.
#[derive(Clone, Debug)]
pub struct CallExpr {
    pub callee: Ident,
    pub args: Vec<Expr>,
}

/// A unary application.
#[derive(Clone, Debug)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Expr,
}

/// A binary application.
#[derive(Clone, Debug)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub lhs: Expr,
    pub rhs: Expr,
}
