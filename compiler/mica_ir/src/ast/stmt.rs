//! Statement nodes.

use super::{AssignExpr, CallExpr, Expr, VarDecl};

/// A braced body: local declarations followed by statements.
///
/// Function bodies and the branch/loop bodies of `if`, `if`/`else`
/// and `while` all share this shape.
#[derive(Clone, Debug, Default)]
pub struct Block {
    pub decls: Vec<VarDecl>,
    pub stmts: Vec<Stmt>,
}

/// Statement kinds.
#[derive(Clone, Debug)]
pub enum Stmt {
    Assign(AssignExpr),
    PostInc(Expr),
    PostDec(Expr),
    /// `cin >> expr;`
    Read(Expr),
    /// `cout << expr;`
    Write(Expr),
    If(IfStmt),
    IfElse(IfElseStmt),
    While(WhileStmt),
    Call(CallExpr),
    /// `return;` carries no expression.
    Return(Option<Expr>),
}

/// An `if` statement. The condition is evaluated in the enclosing
/// scope; the body opens its own.
#[derive(Clone, Debug)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_block: Block,
}

/// An `if`/`else` statement with two disjoint branch scopes.
#[derive(Clone, Debug)]
pub struct IfElseStmt {
    pub cond: Expr,
    pub then_block: Block,
    pub else_block: Block,
}

/// A `while` loop.
#[derive(Clone, Debug)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: Block,
}
