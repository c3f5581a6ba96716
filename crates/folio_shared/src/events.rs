//! Input events consumed by the particle backdrop.
//!
//! The browser front end builds these from DOM events. The native replay tool
//! builds them on a producer thread and sends them over a channel.

use crate::math::Vec2;

/// Size of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Creates a new viewport
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Events that drive the backdrop. Timestamps are milliseconds on a monotonic clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved over the viewport
    PointerMove {
        /// Pointer position
        position: Vec2,
        /// Event time
        at_ms: f64,
    },

    /// Viewport was resized
    Resize {
        /// New viewport size
        viewport: Viewport,
        /// Event time
        at_ms: f64,
    },

    /// Display refresh tick
    Frame {
        /// Frame time
        at_ms: f64,
    },
}

impl InputEvent {
    /// Returns the event timestamp
    #[must_use]
    pub const fn at_ms(&self) -> f64 {
        match self {
            Self::PointerMove { at_ms, .. }
            | Self::Resize { at_ms, .. }
            | Self::Frame { at_ms } => *at_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_timestamp() {
        let event = InputEvent::PointerMove {
            position: Vec2::new(3.0, 4.0),
            at_ms: 120.0,
        };
        assert_eq!(event.at_ms(), 120.0);
        assert_eq!(InputEvent::Frame { at_ms: 16.0 }.at_ms(), 16.0);
    }
}
