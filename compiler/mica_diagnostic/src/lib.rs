//! Diagnostic system for Mica compiler error reporting.
//!
//! - Error codes for searchability
//! - Fixed message wording per error kind (downstream tooling keys
//!   off exact text)
//! - Exact source location on every diagnostic
//!
//! Phases report through the [`DiagnosticSink`] trait and never
//! decide aggregation, formatting, or exit policy; that belongs to
//! the driver holding the sink.

pub mod diagnostic;
mod error_code;
mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticQueue, DiagnosticSink};
