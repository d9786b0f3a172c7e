//! The name-resolution traversal.
//!
//! One depth-first, left-to-right walk over the tree, one visit per
//! node. Declarations create symbols, identifier occurrences are
//! bound to them, and every user-facing failure is reported through
//! the sink without stopping the walk: the offending subtree stops
//! contributing bindings, but siblings and the rest of the tree are
//! still analyzed so all errors in one source file surface in a
//! single run.

use std::rc::Rc;

use mica_diagnostic::{diagnostic, Diagnostic, DiagnosticSink};
use mica_ir::ast::{
    Block, Decl, DotAccess, Expr, FnDecl, FormalDecl, Ident, PrimType, Program, Stmt, StructDecl,
    TypeSpec, VarDecl,
};
use mica_ir::{FnSignature, Scope, SrcLoc, StringInterner, Symbol, SymbolKind, TypeDesc};
use tracing::{debug, trace};

use crate::SymbolTable;

/// Resolve every name in `program`, annotating identifier nodes in
/// place.
///
/// Returns the number of errors reported. The pass always runs to
/// completion; callers must treat a nonzero count as grounds to skip
/// later phases, since bindings on an erroneous tree are best-effort.
///
/// The tree must not have been analyzed before: binding slots are
/// write-once per run.
pub fn analyze(
    program: &mut Program,
    interner: &StringInterner,
    sink: &mut dyn DiagnosticSink,
) -> usize {
    let mut resolver = Resolver::new(interner, sink);
    resolver.resolve_program(program);
    debug!(errors = resolver.errors, "name analysis finished");
    resolver.errors
}

/// Traversal state: the scope stack, the sink, and the running error
/// count. One instance per analysis run.
struct Resolver<'a> {
    table: SymbolTable,
    interner: &'a StringInterner,
    sink: &'a mut dyn DiagnosticSink,
    errors: usize,
}

impl<'a> Resolver<'a> {
    fn new(interner: &'a StringInterner, sink: &'a mut dyn DiagnosticSink) -> Self {
        Resolver {
            table: SymbolTable::new(),
            interner,
            sink,
            errors: 0,
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        debug!(%diagnostic, "reported");
        if diagnostic.is_error() {
            self.errors += 1;
        }
        self.sink.report(diagnostic);
    }

    // ---- declarations ----

    fn resolve_program(&mut self, program: &mut Program) {
        // Top-level declarations resolve strictly in source order;
        // no forward references.
        for decl in &mut program.decls {
            self.resolve_decl(decl);
        }
    }

    fn resolve_decl(&mut self, decl: &mut Decl) {
        match decl {
            Decl::Var(var) => self.resolve_var_decl(var),
            Decl::Fn(func) => self.resolve_fn_decl(func),
            Decl::Struct(st) => self.resolve_struct_decl(st),
        }
    }

    fn resolve_var_decl(&mut self, decl: &mut VarDecl) {
        let kind = self.var_symbol_kind(&mut decl.ty, decl.name.loc);
        self.declare_ident(&mut decl.name, kind);
    }

    /// Compute the symbol kind for a variable or field declaration,
    /// reporting void and unknown-struct-type errors.
    ///
    /// The declaration proceeds either way: a void variable keeps its
    /// `void` descriptor, and a variable of an invalid struct type
    /// gets no field table, so a later dot-access through it reports
    /// a non-struct access instead of crashing.
    fn var_symbol_kind(&mut self, ty: &mut TypeSpec, at: SrcLoc) -> SymbolKind {
        match ty {
            TypeSpec::Int => SymbolKind::Plain(TypeDesc::Int),
            TypeSpec::Bool => SymbolKind::Plain(TypeDesc::Bool),
            TypeSpec::Void => {
                self.report(diagnostic::non_function_void(at));
                SymbolKind::Plain(TypeDesc::Void)
            }
            TypeSpec::Struct(type_id) => {
                // Struct type names are looked up in the global scope
                // only, never in intervening block scopes.
                let resolved = self.table.lookup_global(type_id.name).cloned();
                if let Some(sym) = resolved {
                    if let SymbolKind::StructType { fields } = &sym.kind {
                        let fields = Rc::clone(fields);
                        type_id.bind(Rc::clone(&sym));
                        return SymbolKind::Record {
                            type_name: type_id.name,
                            fields,
                        };
                    }
                }
                self.report(diagnostic::invalid_struct_type(at));
                SymbolKind::Plain(TypeDesc::Struct(type_id.name))
            }
        }
    }

    /// Declare `id` in the innermost scope, binding it to the new
    /// symbol on success. A duplicate is reported and the declaration
    /// otherwise ignored.
    fn declare_ident(&mut self, id: &mut Ident, kind: SymbolKind) {
        let symbol = Rc::new(Symbol::new(id.name, kind));
        match self.table.declare(Rc::clone(&symbol)) {
            Ok(()) => id.bind(symbol),
            Err(_) => self.report(diagnostic::multiply_declared(id.loc)),
        }
    }

    fn resolve_fn_decl(&mut self, decl: &mut FnDecl) {
        let signature = FnSignature {
            params: decl.formals.iter().map(|f| TypeDesc::from(f.ty)).collect(),
            ret: TypeDesc::from(decl.ret),
        };
        trace!(
            name = self.interner.lookup(decl.name.name),
            signature = %signature.render(self.interner),
            "function declaration"
        );

        // Declared into the enclosing scope before the function's own
        // scope opens, so the body can call it recursively.
        self.declare_ident(&mut decl.name, SymbolKind::Function(signature));

        // Formals and body locals share one scope level: a collision
        // between them is a duplicate declaration.
        self.table.enter_scope();
        for formal in &mut decl.formals {
            self.resolve_formal(formal);
        }
        self.resolve_block_in_current_scope(&mut decl.body);
        self.table.exit_scope();
    }

    fn resolve_formal(&mut self, formal: &mut FormalDecl) {
        match formal.ty {
            // A void formal is reported and not declared.
            PrimType::Void => self.report(diagnostic::non_function_void(formal.name.loc)),
            PrimType::Int => self.declare_ident(&mut formal.name, SymbolKind::Plain(TypeDesc::Int)),
            PrimType::Bool => {
                self.declare_ident(&mut formal.name, SymbolKind::Plain(TypeDesc::Bool));
            }
        }
    }

    fn resolve_struct_decl(&mut self, decl: &mut StructDecl) {
        // The field list resolves into a fresh, isolated namespace,
        // not linked to the enclosing scope chain. Struct *type*
        // lookups inside it (for struct-typed fields) still consult
        // the main table's global scope.
        let mut fields = Scope::new();
        for field in &mut decl.fields {
            self.resolve_field_decl(field, &mut fields);
        }
        self.declare_ident(
            &mut decl.name,
            SymbolKind::StructType {
                fields: Rc::new(fields),
            },
        );
    }

    fn resolve_field_decl(&mut self, decl: &mut VarDecl, fields: &mut Scope) {
        let kind = self.var_symbol_kind(&mut decl.ty, decl.name.loc);
        let symbol = Rc::new(Symbol::new(decl.name.name, kind));
        match fields.insert(Rc::clone(&symbol)) {
            Ok(()) => decl.name.bind(symbol),
            Err(_) => self.report(diagnostic::multiply_declared(decl.name.loc)),
        }
    }

    // ---- statements ----

    /// Resolve a block's declarations, then its statements, in the
    /// current scope. Used directly for function bodies, where the
    /// formals already opened the scope.
    fn resolve_block_in_current_scope(&mut self, block: &mut Block) {
        for decl in &mut block.decls {
            self.resolve_var_decl(decl);
        }
        for stmt in &mut block.stmts {
            self.resolve_stmt(stmt);
        }
    }

    /// Resolve a block in its own scope.
    fn resolve_block(&mut self, block: &mut Block) {
        self.table.enter_scope();
        self.resolve_block_in_current_scope(block);
        self.table.exit_scope();
    }

    fn resolve_stmt(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::Assign(assign) => {
                self.resolve_expr(&mut assign.target);
                self.resolve_expr(&mut assign.value);
            }
            Stmt::PostInc(expr)
            | Stmt::PostDec(expr)
            | Stmt::Read(expr)
            | Stmt::Write(expr) => self.resolve_expr(expr),
            Stmt::If(stmt) => {
                // The condition belongs to the enclosing scope.
                self.resolve_expr(&mut stmt.cond);
                self.resolve_block(&mut stmt.then_block);
            }
            Stmt::IfElse(stmt) => {
                self.resolve_expr(&mut stmt.cond);
                // Two disjoint scopes, each entered and exited once.
                self.resolve_block(&mut stmt.then_block);
                self.resolve_block(&mut stmt.else_block);
            }
            Stmt::While(stmt) => {
                self.resolve_expr(&mut stmt.cond);
                self.resolve_block(&mut stmt.body);
            }
            Stmt::Call(call) => {
                self.resolve_ident(&mut call.callee);
                for arg in &mut call.args {
                    self.resolve_expr(arg);
                }
            }
            // A bare return is a no-op for name analysis.
            Stmt::Return(None) => {}
            Stmt::Return(Some(expr)) => self.resolve_expr(expr),
        }
    }

    // ---- expressions ----

    fn resolve_expr(&mut self, expr: &mut Expr) {
        match expr {
            Expr::IntLit { .. } | Expr::StrLit { .. } | Expr::True(_) | Expr::False(_) => {}
            Expr::Ident(id) => self.resolve_ident(id),
            Expr::Dot(dot) => {
                self.resolve_dot_access(dot);
            }
            Expr::Assign(assign) => {
                self.resolve_expr(&mut assign.target);
                self.resolve_expr(&mut assign.value);
            }
            Expr::Call(call) => {
                // Existence only: whether the callee is actually a
                // function symbol is left to the type checker, as is
                // argument arity.
                self.resolve_ident(&mut call.callee);
                for arg in &mut call.args {
                    self.resolve_expr(arg);
                }
            }
            Expr::Unary(unary) => self.resolve_expr(&mut unary.operand),
            Expr::Binary(binary) => {
                self.resolve_expr(&mut binary.lhs);
                self.resolve_expr(&mut binary.rhs);
            }
        }
    }

    /// Bind an identifier occurrence to its innermost visible
    /// declaration, or report it undeclared and leave the slot empty.
    fn resolve_ident(&mut self, id: &mut Ident) {
        match self.table.lookup_visible(id.name).cloned() {
            Some(symbol) => id.bind(symbol),
            None => self.report(diagnostic::undeclared_identifier(id.loc)),
        }
    }

    /// Resolve `base.field`, returning the field's symbol when every
    /// step of the chain resolves through a struct-typed symbol.
    ///
    /// Failure is reported here and propagated as `None`: the field
    /// is left unbound and an enclosing dot-access stops without
    /// piling further errors onto the same chain.
    fn resolve_dot_access(&mut self, dot: &mut DotAccess) -> Option<Rc<Symbol>> {
        let base_table = match &mut dot.base {
            Expr::Ident(id) => {
                self.resolve_ident(id);
                match id.binding().and_then(|sym| sym.field_table()) {
                    Some(fields) => Rc::clone(fields),
                    None => {
                        // Covers both an undeclared base (already
                        // reported as such) and a non-struct one.
                        self.report(diagnostic::non_struct_access(id.loc));
                        return None;
                    }
                }
            }
            Expr::Dot(inner) => {
                let field_symbol = self.resolve_dot_access(inner)?;
                match field_symbol.field_table() {
                    Some(fields) => Rc::clone(fields),
                    None => {
                        self.report(diagnostic::non_struct_access(inner.field.loc));
                        return None;
                    }
                }
            }
            other => {
                // The grammar only produces identifier or dot-access
                // bases, but the node shape admits any expression.
                self.resolve_expr(other);
                self.report(diagnostic::non_struct_access(dot.field.loc));
                return None;
            }
        };

        // A struct's fields are a closed namespace: local to this
        // table only, no shadowing outward.
        match base_table.get(dot.field.name).cloned() {
            Some(symbol) => {
                dot.field.bind(Rc::clone(&symbol));
                Some(symbol)
            }
            None => {
                self.report(diagnostic::invalid_struct_field(dot.field.loc));
                None
            }
        }
    }
}
