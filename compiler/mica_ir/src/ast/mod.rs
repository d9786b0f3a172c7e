//! Syntax-tree node hierarchy for Mica.
//!
//! Built once by the external parser; name resolution annotates
//! identifier occurrences in place. Each node category is a closed
//! enum so the resolver's per-kind rules live in one exhaustive
//! `match` rather than scattered per-type methods.

mod decl;
mod expr;
mod op;
mod stmt;

pub use decl::{Decl, FnDecl, FormalDecl, PrimType, StructDecl, TypeSpec, VarDecl};
pub use expr::{AssignExpr, BinaryExpr, CallExpr, DotAccess, Expr, UnaryExpr};
pub use op::{BinaryOp, UnaryOp};
pub use stmt::{Block, IfElseStmt, IfStmt, Stmt, WhileStmt};

use std::rc::Rc;

use crate::{Name, SrcLoc, Symbol};

/// A complete program: the top-level declaration sequence.
#[derive(Clone, Debug, Default)]
pub struct Program {
    pub decls: Vec<Decl>,
}

impl Program {
    pub fn new(decls: Vec<Decl>) -> Self {
        Program { decls }
    }
}

/// An identifier occurrence with its write-once resolved binding.
#[derive(Clone, Debug)]
pub struct Ident {
    pub loc: SrcLoc,
    pub name: Name,
    binding: Option<Rc<Symbol>>,
}

impl Ident {
    /// Create an unbound identifier occurrence.
    pub fn new(loc: SrcLoc, name: Name) -> Self {
        Ident {
            loc,
            name,
            binding: None,
        }
    }

    /// The symbol this occurrence resolved to, if resolution
    /// succeeded. Later phases read this; they never write it.
    pub fn binding(&self) -> Option<&Rc<Symbol>> {
        self.binding.as_ref()
    }

    /// Bind this occurrence to `symbol`.
    ///
    /// The slot is write-once per analysis run; rebinding means the
    /// resolver visited a node twice.
    pub fn bind(&mut self, symbol: Rc<Symbol>) {
        debug_assert!(self.binding.is_none(), "identifier bound twice");
        self.binding = Some(symbol);
    }
}
