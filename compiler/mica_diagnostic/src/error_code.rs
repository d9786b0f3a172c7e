use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Parser errors (reserved for the external parser)
/// - E2xxx: Name-analysis errors
/// - E9xxx: Internal compiler errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Name-analysis errors (E2xxx)
    /// Name already declared in the current scope
    E2001,
    /// Identifier has no visible binding in any enclosing scope
    E2002,
    /// Declared struct type is not a struct in the global scope
    E2003,
    /// Dot-access field name absent from the struct's field table
    E2004,
    /// Dot-access base does not resolve to a struct-typed symbol
    E2005,
    /// Variable or formal parameter declared with type void
    E2006,

    // Internal errors (E9xxx)
    /// Internal compiler error
    E9001,
}

impl ErrorCode {
    /// Check if this is a name-analysis error (E2xxx range).
    pub fn is_name_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Get the numeric code as a string (e.g., "E2001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E9001 => "E9001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E2001.to_string(), "E2001");
        assert_eq!(ErrorCode::E9001.as_str(), "E9001");
    }

    #[test]
    fn test_is_name_error() {
        assert!(ErrorCode::E2004.is_name_error());
        assert!(!ErrorCode::E9001.is_name_error());
    }
}
