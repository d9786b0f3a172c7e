//! The scoped symbol table: a stack of scopes with a permanent
//! global scope at the bottom.
//!
//! Names are looked up by walking the stack innermost-to-outermost,
//! which gives shadowing its semantics; declaration always targets
//! the innermost scope only.

use std::rc::Rc;

use mica_ir::{DuplicateName, Name, Scope, Symbol};
use tracing::trace;

/// A stack of scopes, innermost on top.
///
/// The bottom scope is the global scope, created at construction and
/// never removed: the stack cannot become empty during a valid run.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl SymbolTable {
    /// Create a table holding only the global scope.
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![Scope::new()],
        }
    }

    /// Number of live scopes, the global scope included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Push an empty innermost scope.
    pub fn enter_scope(&mut self) {
        self.scopes.push(Scope::new());
        trace!(depth = self.scopes.len(), "enter scope");
    }

    /// Pop the innermost scope.
    ///
    /// # Panics
    /// Panics if only the global scope remains. The global scope is
    /// permanent, so an underflow means the resolver's enter/exit
    /// calls are mismatched; no source input can cause it.
    pub fn exit_scope(&mut self) {
        assert!(
            self.scopes.len() > 1,
            "scope stack underflow: attempted to pop the global scope"
        );
        self.scopes.pop();
        trace!(depth = self.scopes.len(), "exit scope");
    }

    /// Declare a symbol in the innermost scope.
    ///
    /// Fails if the name already exists in the innermost scope.
    /// Shadowing an outer scope is allowed and not an error.
    pub fn declare(&mut self, symbol: Rc<Symbol>) -> Result<(), DuplicateName> {
        let innermost = self
            .scopes
            .last_mut()
            .unwrap_or_else(|| unreachable!("the global scope is never removed"));
        innermost.insert(symbol)
    }

    /// Look up a name in the innermost scope only.
    pub fn lookup_local(&self, name: Name) -> Option<&Rc<Symbol>> {
        self.scopes
            .last()
            .and_then(|innermost| innermost.get(name))
    }

    /// Look up a name innermost-to-outermost, returning the first
    /// match: an inner declaration shadows an outer one.
    pub fn lookup_visible(&self, name: Name) -> Option<&Rc<Symbol>> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Look up a name in the global scope only. Struct type names
    /// live there regardless of where a variable of that type is
    /// declared.
    pub fn lookup_global(&self, name: Name) -> Option<&Rc<Symbol>> {
        self.scopes[0].get(name)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mica_ir::{StringInterner, SymbolKind, TypeDesc};

    fn plain(name: Name, ty: TypeDesc) -> Rc<Symbol> {
        Rc::new(Symbol::new(name, SymbolKind::Plain(ty)))
    }

    #[test]
    fn test_enter_exit() {
        let mut table = SymbolTable::new();
        assert_eq!(table.depth(), 1);

        table.enter_scope();
        table.enter_scope();
        assert_eq!(table.depth(), 3);

        table.exit_scope();
        table.exit_scope();
        assert_eq!(table.depth(), 1);
    }

    #[test]
    #[should_panic(expected = "scope stack underflow")]
    fn test_popping_global_scope_panics() {
        let mut table = SymbolTable::new();
        table.exit_scope();
    }

    #[test]
    fn test_lookup_visible_walks_outward() {
        let interner = StringInterner::new();
        let mut table = SymbolTable::new();

        let x = interner.intern("x");
        let y = interner.intern("y");

        table.declare(plain(x, TypeDesc::Int)).unwrap();
        table.enter_scope();
        table.declare(plain(y, TypeDesc::Bool)).unwrap();

        assert!(table.lookup_visible(x).is_some());
        assert!(table.lookup_visible(y).is_some());
        assert!(table.lookup_local(x).is_none());
        assert!(table.lookup_local(y).is_some());

        table.exit_scope();
        assert!(table.lookup_visible(y).is_none());
    }

    #[test]
    fn test_shadowing_picks_innermost() {
        let interner = StringInterner::new();
        let mut table = SymbolTable::new();

        let x = interner.intern("x");

        table.declare(plain(x, TypeDesc::Int)).unwrap();
        table.enter_scope();
        table.declare(plain(x, TypeDesc::Bool)).unwrap();

        let found = table.lookup_visible(x).unwrap();
        assert!(matches!(found.kind, SymbolKind::Plain(TypeDesc::Bool)));

        table.exit_scope();
        let found = table.lookup_visible(x).unwrap();
        assert!(matches!(found.kind, SymbolKind::Plain(TypeDesc::Int)));
    }

    #[test]
    fn test_duplicate_in_same_scope_rejected() {
        let interner = StringInterner::new();
        let mut table = SymbolTable::new();

        let x = interner.intern("x");

        table.declare(plain(x, TypeDesc::Bool)).unwrap();
        let err = table.declare(plain(x, TypeDesc::Int)).unwrap_err();
        assert_eq!(err, DuplicateName(x));

        // First declaration survives
        let found = table.lookup_local(x).unwrap();
        assert!(matches!(found.kind, SymbolKind::Plain(TypeDesc::Bool)));
    }

    #[test]
    fn test_lookup_global_ignores_inner_scopes() {
        let interner = StringInterner::new();
        let mut table = SymbolTable::new();

        let g = interner.intern("g");
        let local = interner.intern("local");

        table.declare(plain(g, TypeDesc::Int)).unwrap();
        table.enter_scope();
        table.declare(plain(local, TypeDesc::Int)).unwrap();

        assert!(table.lookup_global(g).is_some());
        assert!(table.lookup_global(local).is_none());
    }
}
