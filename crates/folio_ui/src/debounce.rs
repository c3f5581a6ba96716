//! Resize debouncing.

use folio_shared::Viewport;

/// Holds back viewport resizes until the window has been quiet for a while.
///
/// Every new resize restarts the wait, so only the last size of a drag is
/// ever applied.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    delay_ms: f64,
    pending: Option<(Viewport, f64)>,
}

impl ResizeDebouncer {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub const fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Records a resize, replacing any pending one.
    pub fn schedule(&mut self, viewport: Viewport, now_ms: f64) {
        self.pending = Some((viewport, now_ms + self.delay_ms));
    }

    /// Returns the pending size once its deadline has passed.
    pub fn poll(&mut self, now_ms: f64) -> Option<Viewport> {
        match self.pending {
            Some((viewport, due)) if now_ms >= due => {
                self.pending = None;
                Some(viewport)
            }
            _ => None,
        }
    }

    /// Drops any pending resize.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_delay() {
        let mut debouncer = ResizeDebouncer::new(100.0);
        debouncer.schedule(Viewport::new(800, 600), 0.0);

        assert_eq!(debouncer.poll(99.0), None);
        assert_eq!(debouncer.poll(100.0), Some(Viewport::new(800, 600)));
        assert_eq!(debouncer.poll(200.0), None);
    }

    #[test]
    fn test_new_resize_restarts_wait() {
        let mut debouncer = ResizeDebouncer::new(100.0);
        debouncer.schedule(Viewport::new(800, 600), 0.0);
        debouncer.schedule(Viewport::new(900, 600), 80.0);

        assert_eq!(debouncer.poll(150.0), None);
        assert_eq!(debouncer.poll(180.0), Some(Viewport::new(900, 600)));
    }

    #[test]
    fn test_cancel() {
        let mut debouncer = ResizeDebouncer::new(100.0);
        debouncer.schedule(Viewport::new(800, 600), 0.0);
        debouncer.cancel();
        assert_eq!(debouncer.poll(500.0), None);
    }
}
