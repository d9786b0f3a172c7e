//! Diagnostic sink trait and the collecting queue implementation.

use crate::Diagnostic;

/// Where a phase reports its diagnostics.
///
/// Aggregation, formatting, and whether to halt the overall
/// compilation belong to the caller owning the sink; a phase only
/// calls `report`.
pub trait DiagnosticSink {
    /// Report one diagnostic at its point of detection.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Queue for collecting and sorting diagnostics.
///
/// The standard sink implementation: collects everything a run
/// reports, counts errors, and drains in source order so emission is
/// deterministic regardless of traversal details.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    /// Collected diagnostics.
    diagnostics: Vec<Diagnostic>,
    /// Count of errors (not warnings).
    error_count: usize,
}

impl DiagnosticQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        DiagnosticQueue::default()
    }

    /// Number of errors reported so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Total number of queued diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Drain all diagnostics sorted by source position.
    ///
    /// The sort is stable, so diagnostics at the same position keep
    /// their report order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.diagnostics
            .sort_by_key(|d| (d.loc.line, d.loc.col));
        std::mem::take(&mut self.diagnostics)
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::{multiply_declared, undeclared_identifier};
    use mica_ir::SrcLoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_queue_counts_errors() {
        let mut queue = DiagnosticQueue::new();
        assert_eq!(queue.error_count(), 0);

        queue.report(undeclared_identifier(SrcLoc::new(2, 1)));
        queue.report(multiply_declared(SrcLoc::new(1, 5)));

        assert_eq!(queue.error_count(), 2);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_flush_sorts_by_position() {
        let mut queue = DiagnosticQueue::new();
        queue.report(undeclared_identifier(SrcLoc::new(4, 2)));
        queue.report(multiply_declared(SrcLoc::new(1, 9)));
        queue.report(undeclared_identifier(SrcLoc::new(4, 1)));

        let sorted = queue.flush();
        let positions: Vec<(u32, u32)> = sorted.iter().map(|d| (d.loc.line, d.loc.col)).collect();
        assert_eq!(positions, [(1, 9), (4, 1), (4, 2)]);

        // Flushed queue is empty; error count is a running total.
        assert!(queue.is_empty());
        assert_eq!(queue.error_count(), 3);
    }
}
