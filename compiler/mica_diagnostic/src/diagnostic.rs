use std::fmt;

use mica_ir::SrcLoc;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic with its code, severity, message, and source location.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Severity level.
    pub severity: Severity,
    /// Message text. Fixed per error kind; see the catalog helpers
    /// below.
    pub message: String,
    /// Where the error occurred.
    pub loc: SrcLoc,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode, loc: SrcLoc, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: message.into(),
            loc,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(code: ErrorCode, loc: SrcLoc, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity: Severity::Warning,
            message: message.into(),
            loc,
        }
    }

    /// Check if this is an error (vs warning).
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}]: {}",
            self.loc, self.severity, self.code, self.message
        )
    }
}

// The name-analysis catalog. Message wording is part of the phase's
// contract: tests and downstream tooling match on exact text.

/// Create a "multiply declared identifier" diagnostic.
pub fn multiply_declared(loc: SrcLoc) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001, loc, "Multiply declared identifier")
}

/// Create an "undeclared identifier" diagnostic.
pub fn undeclared_identifier(loc: SrcLoc) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002, loc, "Undeclared identifier")
}

/// Create an "invalid name of struct type" diagnostic.
pub fn invalid_struct_type(loc: SrcLoc) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2003, loc, "Invalid name of struct type")
}

/// Create an "invalid struct field name" diagnostic.
pub fn invalid_struct_field(loc: SrcLoc) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2004, loc, "Invalid struct field name")
}

/// Create a "dot-access of non-struct type" diagnostic.
pub fn non_struct_access(loc: SrcLoc) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2005, loc, "Dot-access of non-struct type")
}

/// Create a "non-function declared void" diagnostic.
pub fn non_function_void(loc: SrcLoc) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2006, loc, "Non-function declared void")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_wording_is_stable() {
        let loc = SrcLoc::new(1, 1);
        assert_eq!(multiply_declared(loc).message, "Multiply declared identifier");
        assert_eq!(undeclared_identifier(loc).message, "Undeclared identifier");
        assert_eq!(invalid_struct_type(loc).message, "Invalid name of struct type");
        assert_eq!(invalid_struct_field(loc).message, "Invalid struct field name");
        assert_eq!(non_struct_access(loc).message, "Dot-access of non-struct type");
        assert_eq!(non_function_void(loc).message, "Non-function declared void");
    }

    #[test]
    fn test_catalog_codes() {
        let loc = SrcLoc::DUMMY;
        assert_eq!(multiply_declared(loc).code, ErrorCode::E2001);
        assert_eq!(undeclared_identifier(loc).code, ErrorCode::E2002);
        assert_eq!(invalid_struct_type(loc).code, ErrorCode::E2003);
        assert_eq!(invalid_struct_field(loc).code, ErrorCode::E2004);
        assert_eq!(non_struct_access(loc).code, ErrorCode::E2005);
        assert_eq!(non_function_void(loc).code, ErrorCode::E2006);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = multiply_declared(SrcLoc::new(3, 7));
        assert_eq!(
            diag.to_string(),
            "3:7: error [E2001]: Multiply declared identifier"
        );
    }

    #[test]
    fn test_is_error() {
        assert!(undeclared_identifier(SrcLoc::DUMMY).is_error());
        let warn = Diagnostic::warning(ErrorCode::E9001, SrcLoc::DUMMY, "test");
        assert!(!warn.is_error());
    }
}
