//! Relayout invalidation with nested suspension.
//!
//! Changes mark the layout dirty; the actual request to the host is only
//! issued once no caller holds a suspension. Suspensions nest, so a refresh
//! running inside a batch or inside a caller-held suspension produces a single
//! request when the outermost holder resumes.

/// Tracks whether an editor needs a relayout and whether requests are
/// currently held back.
#[derive(Debug, Default)]
pub struct LayoutInvalidator {
    /// Number of active suspensions.
    depth: usize,

    /// Whether a relayout is owed.
    pending: bool,
}

impl LayoutInvalidator {
    /// Create a new layout invalidator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the layout as needing recalculation.
    pub fn invalidate(&mut self) {
        self.pending = true;
    }

    /// Check if a relayout is owed.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending
    }

    /// Hold back relayout requests until the matching [`resume`](Self::resume).
    pub fn suspend(&mut self) {
        self.depth += 1;
    }

    /// Release one suspension.
    pub fn resume(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Check if any suspension is active.
    #[inline]
    pub fn is_suspended(&self) -> bool {
        self.depth > 0
    }

    /// Consume the pending relayout if no suspension is active.
    ///
    /// Returns `true` when the caller must issue exactly one relayout request.
    pub fn take_request(&mut self) -> bool {
        if self.depth == 0 && self.pending {
            self.pending = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalidate_and_take() {
        let mut invalidator = LayoutInvalidator::new();
        assert!(!invalidator.take_request());

        invalidator.invalidate();
        invalidator.invalidate();
        assert!(invalidator.has_pending());
        assert!(invalidator.take_request());
        assert!(!invalidator.take_request());
    }

    #[test]
    fn test_nested_suspension() {
        let mut invalidator = LayoutInvalidator::new();
        invalidator.suspend();
        invalidator.suspend();
        invalidator.invalidate();

        assert!(!invalidator.take_request());
        invalidator.resume();
        assert!(invalidator.is_suspended());
        assert!(!invalidator.take_request());
        invalidator.resume();
        assert!(!invalidator.is_suspended());
        assert!(invalidator.take_request());
    }

    #[test]
    fn test_unbalanced_resume_is_harmless() {
        let mut invalidator = LayoutInvalidator::new();
        invalidator.resume();
        assert!(!invalidator.is_suspended());
        invalidator.invalidate();
        assert!(invalidator.take_request());
    }
}
