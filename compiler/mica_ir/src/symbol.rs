//! Symbols and struct field tables produced by name resolution.
//!
//! A [`Symbol`] is the semantic record a declared name refers to.
//! Symbols are created once, when their declaration is resolved, and
//! shared by reference: every identifier occurrence that resolves to
//! a declaration holds an `Rc` to the same `Symbol`, and every
//! variable of a struct type shares the declaring type's field table.

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::{Name, StringLookup};

/// Categorical type descriptor for a declared name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeDesc {
    Int,
    Bool,
    Void,
    /// A value of the named struct type.
    Struct(Name),
}

impl TypeDesc {
    /// Render the descriptor as source-level text.
    pub fn render(&self, strings: &impl StringLookup) -> String {
        match self {
            TypeDesc::Int => "int".to_owned(),
            TypeDesc::Bool => "bool".to_owned(),
            TypeDesc::Void => "void".to_owned(),
            TypeDesc::Struct(name) => strings.lookup(*name).to_owned(),
        }
    }
}

/// A function's formal-parameter and return type descriptors.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FnSignature {
    pub params: Vec<TypeDesc>,
    pub ret: TypeDesc,
}

impl FnSignature {
    /// Render the derived signature string, e.g. `(int, bool) -> void`.
    pub fn render(&self, strings: &impl StringLookup) -> String {
        let params: Vec<String> = self.params.iter().map(|t| t.render(strings)).collect();
        format!("({}) -> {}", params.join(", "), self.ret.render(strings))
    }
}

/// What a symbol's name denotes.
#[derive(Clone, Debug)]
pub enum SymbolKind {
    /// A variable or formal of primitive type. A `void` variable kept
    /// after its diagnostic lands here with `TypeDesc::Void`.
    Plain(TypeDesc),
    /// A variable or field of a declared struct type. `fields` is
    /// shared with (not copied from) the type's own table, so
    /// dot-access resolves against the same field symbols.
    Record { type_name: Name, fields: Rc<Scope> },
    /// A struct type declaration, owning the canonical field table.
    StructType { fields: Rc<Scope> },
    /// A function declaration.
    Function(FnSignature),
}

/// The resolved semantic record for one declared name.
#[derive(Clone, Debug)]
pub struct Symbol {
    pub name: Name,
    pub kind: SymbolKind,
}

impl Symbol {
    /// Create a new symbol.
    pub fn new(name: Name, kind: SymbolKind) -> Self {
        Symbol { name, kind }
    }

    /// The field table to resolve a dot-access against, when this
    /// symbol is struct-typed (a struct-typed variable or field, or
    /// the struct type itself).
    pub fn field_table(&self) -> Option<&Rc<Scope>> {
        match &self.kind {
            SymbolKind::Record { fields, .. } | SymbolKind::StructType { fields } => Some(fields),
            SymbolKind::Plain(_) | SymbolKind::Function(_) => None,
        }
    }

    /// Check if this symbol is a struct type declaration.
    pub fn is_struct_type(&self) -> bool {
        matches!(self.kind, SymbolKind::StructType { .. })
    }

    /// The signature, when this symbol is a function.
    pub fn signature(&self) -> Option<&FnSignature> {
        match &self.kind {
            SymbolKind::Function(sig) => Some(sig),
            _ => None,
        }
    }
}

/// Error returned when a name is already present in a scope.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DuplicateName(pub Name);

/// An ordered name-to-symbol map: one lexical scope level, or a
/// struct type's closed field table.
///
/// Insertion order is preserved so iteration (and any printing built
/// on it) is deterministic.
#[derive(Default)]
pub struct Scope {
    symbols: Vec<Rc<Symbol>>,
    index: FxHashMap<Name, usize>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Insert a symbol under its own name.
    ///
    /// Fails without modifying the scope if the name is already
    /// present; shadowing is an outer-scope concern, not this map's.
    pub fn insert(&mut self, symbol: Rc<Symbol>) -> Result<(), DuplicateName> {
        let name = symbol.name;
        if self.index.contains_key(&name) {
            return Err(DuplicateName(name));
        }
        self.index.insert(name, self.symbols.len());
        self.symbols.push(symbol);
        Ok(())
    }

    /// Look up a symbol by name in this scope only.
    pub fn get(&self, name: Name) -> Option<&Rc<Symbol>> {
        self.index.get(&name).map(|&i| &self.symbols[i])
    }

    /// Iterate symbols in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<Symbol>> {
        self.symbols.iter()
    }

    /// Number of symbols in this scope.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the scope holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.symbols.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringInterner;

    #[test]
    fn test_scope_insert_and_get() {
        let interner = StringInterner::new();
        let mut scope = Scope::new();

        let x = interner.intern("x");
        let y = interner.intern("y");

        scope
            .insert(Rc::new(Symbol::new(x, SymbolKind::Plain(TypeDesc::Int))))
            .unwrap();

        assert!(scope.get(x).is_some());
        assert!(scope.get(y).is_none());
        assert_eq!(scope.len(), 1);
    }

    #[test]
    fn test_scope_rejects_duplicate() {
        let interner = StringInterner::new();
        let mut scope = Scope::new();

        let x = interner.intern("x");

        scope
            .insert(Rc::new(Symbol::new(x, SymbolKind::Plain(TypeDesc::Bool))))
            .unwrap();
        let err = scope
            .insert(Rc::new(Symbol::new(x, SymbolKind::Plain(TypeDesc::Int))))
            .unwrap_err();

        assert_eq!(err, DuplicateName(x));
        // First insertion wins
        let sym = scope.get(x).unwrap();
        assert!(matches!(sym.kind, SymbolKind::Plain(TypeDesc::Bool)));
    }

    #[test]
    fn test_scope_preserves_insertion_order() {
        let interner = StringInterner::new();
        let mut scope = Scope::new();

        for s in ["c", "a", "b"] {
            let name = interner.intern(s);
            scope
                .insert(Rc::new(Symbol::new(name, SymbolKind::Plain(TypeDesc::Int))))
                .unwrap();
        }

        let order: Vec<&str> = scope.iter().map(|s| interner.lookup(s.name)).collect();
        assert_eq!(order, ["c", "a", "b"]);
    }

    #[test]
    fn test_signature_render() {
        let interner = StringInterner::new();
        let sig = FnSignature {
            params: vec![TypeDesc::Int, TypeDesc::Bool],
            ret: TypeDesc::Void,
        };
        assert_eq!(sig.render(&interner), "(int, bool) -> void");

        let nullary = FnSignature {
            params: vec![],
            ret: TypeDesc::Int,
        };
        assert_eq!(nullary.render(&interner), "() -> int");
    }

    #[test]
    fn test_field_table_accessor() {
        let interner = StringInterner::new();
        let kitty = interner.intern("kitty");
        let fields = Rc::new(Scope::new());

        let ty = Symbol::new(
            kitty,
            SymbolKind::StructType {
                fields: Rc::clone(&fields),
            },
        );
        let var = Symbol::new(
            interner.intern("fluffy"),
            SymbolKind::Record {
                type_name: kitty,
                fields: Rc::clone(&fields),
            },
        );
        let plain = Symbol::new(interner.intern("n"), SymbolKind::Plain(TypeDesc::Int));

        // Type and variable share one table; primitives have none.
        assert!(Rc::ptr_eq(ty.field_table().unwrap(), var.field_table().unwrap()));
        assert!(plain.field_table().is_none());
        assert!(ty.is_struct_type());
        assert!(!var.is_struct_type());
    }
}
