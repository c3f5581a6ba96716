//! Spawn throttle.

/// Accepts an event only if enough time has passed since the last accepted one.
///
/// The first event is always accepted. Rejected events do not move the window.
#[derive(Debug, Clone)]
pub struct SpawnThrottle {
    interval_ms: f64,
    last_accepted_ms: Option<f64>,
}

impl SpawnThrottle {
    /// Creates a throttle with the given minimum spacing.
    #[must_use]
    pub const fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_accepted_ms: None,
        }
    }

    /// Returns true and records `now_ms` if the event may pass.
    pub fn accept(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms - last < self.interval_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }

    /// Forgets the last accepted event.
    pub fn reset(&mut self) {
        self.last_accepted_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_passes() {
        let mut throttle = SpawnThrottle::new(40.0);
        assert!(throttle.accept(0.0));
        // Anything inside the window after it is rejected
        assert!(!throttle.accept(39.0));
    }

    #[test]
    fn test_window_boundary() {
        let mut throttle = SpawnThrottle::new(40.0);
        assert!(throttle.accept(1000.0));
        assert!(!throttle.accept(1039.9));
        // Exactly 40ms later is enough
        assert!(throttle.accept(1040.0));
    }

    #[test]
    fn test_rejections_do_not_slide_window() {
        let mut throttle = SpawnThrottle::new(40.0);
        assert!(throttle.accept(0.0));
        for t in [10.0, 20.0, 30.0] {
            assert!(!throttle.accept(t));
        }
        assert!(throttle.accept(40.0));
    }

    #[test]
    fn test_reset() {
        let mut throttle = SpawnThrottle::new(40.0);
        assert!(throttle.accept(5.0));
        throttle.reset();
        assert!(throttle.accept(6.0));
    }
}
