//! Shared IR types for the Mica compiler.
//!
//! Hosts everything later phases consume: source locations, interned
//! names, the syntax-tree node hierarchy built by the parser, and the
//! symbol types name resolution attaches to that tree.

pub mod ast;
mod interner;
mod name;
mod srcloc;
pub mod symbol;

pub use interner::{StringInterner, StringLookup};
pub use name::Name;
pub use srcloc::SrcLoc;
pub use symbol::{DuplicateName, FnSignature, Scope, Symbol, SymbolKind, TypeDesc};
