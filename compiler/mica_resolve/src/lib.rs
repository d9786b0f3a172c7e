//! Name resolution for the Mica compiler.
//!
//! Builds a scoped symbol table, binds every identifier occurrence to
//! the declaration it refers to, validates struct-type references and
//! nested field-access chains, and rejects structurally invalid
//! declarations (void variables, duplicate names in one scope).
//!
//! The pass runs exactly once per tree: [`analyze`] walks the syntax
//! tree top-down, left-to-right, depth-first, mutating identifier
//! nodes in place and reporting every error through the caller's
//! sink. The caller decides, from the returned error count, whether
//! the annotated tree is fit for later phases.

mod resolver;
mod table;

pub use resolver::analyze;
pub use table::SymbolTable;
