//! Source locations.
//!
//! The external lexer records positions as 1-based line/column pairs,
//! and diagnostics report them verbatim.

use std::fmt;

/// A 1-based line/column source position.
///
/// Layout: 8 bytes total. Copied freely; every identifier and literal
/// node carries one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct SrcLoc {
    pub line: u32,
    pub col: u32,
}

impl SrcLoc {
    /// Dummy location for synthesized nodes.
    pub const DUMMY: SrcLoc = SrcLoc { line: 0, col: 0 };

    /// Create a new location.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        SrcLoc { line, col }
    }
}

impl fmt::Debug for SrcLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SrcLoc({}:{})", self.line, self.col)
    }
}

impl fmt::Display for SrcLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SrcLoc::new(3, 14).to_string(), "3:14");
    }

    #[test]
    fn test_dummy() {
        assert_eq!(SrcLoc::DUMMY, SrcLoc::new(0, 0));
    }
}
