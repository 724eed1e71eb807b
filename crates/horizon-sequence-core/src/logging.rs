//! Logging and tracing facilities for Horizon Sequence.
//!
//! Horizon Sequence uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("horizon_sequence=debug"))
//!         .init();
//! }
//! ```
//!
//! Every event is emitted under one of the fixed [`targets`], so a filter such
//! as `horizon_sequence::editor=trace` isolates the reconciler.

/// Span names used throughout Horizon Sequence for tracing.
pub mod span_names {
    /// Full population pass of an editor.
    pub const POPULATE: &str = "horizon_sequence::populate";
    /// Application of a single change notification.
    pub const APPLY_CHANGE: &str = "horizon_sequence::apply_change";
    /// Invariant refresh pass.
    pub const REFRESH: &str = "horizon_sequence::refresh";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_sequence_core::signal";
    /// Sequence model target.
    pub const MODEL: &str = "horizon_sequence::model";
    /// Reconciler target.
    pub const EDITOR: &str = "horizon_sequence::editor";
    /// Command menu and operation table target.
    pub const MENU: &str = "horizon_sequence::menu";
    /// Performance spans.
    pub const PERF: &str = "horizon_sequence::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time population, change application and refresh passes.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new(span_names::POPULATE);
    }

    #[test]
    fn test_targets_are_namespaced() {
        assert!(targets::SIGNAL.starts_with("horizon_sequence_core::"));
        assert!(targets::EDITOR.starts_with("horizon_sequence::"));
    }
}
