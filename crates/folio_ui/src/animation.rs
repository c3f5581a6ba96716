//! Timed transitions.
//!
//! Used for the page background cross-fade when the theme flips.

use crate::style::Color;

/// Easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start and end, like CSS `ease-in-out`.
    #[default]
    CubicInOut,
}

impl Easing {
    /// Maps linear progress `t` (clamped to 0-1) onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A single animated value.
#[derive(Debug, Clone)]
pub struct Animation {
    current: f32,
    start: f32,
    target: f32,
    /// Progress through the transition (0-1).
    progress: f32,
    /// Seconds.
    duration: f32,
    easing: Easing,
}

impl Animation {
    /// Default transition length (seconds).
    pub const DEFAULT_DURATION: f32 = 0.3;

    /// Creates an animation resting at `value`.
    #[must_use]
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            current: value,
            start: value,
            target: value,
            progress: 1.0,
            duration: Self::DEFAULT_DURATION,
            easing,
        }
    }

    /// Sets the transition length.
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// True once the value rests on its target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Starts a transition from the current value towards `target`.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() > 1e-4 {
            self.start = self.current;
            self.target = target;
            self.progress = 0.0;
        }
    }

    /// Advances by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.is_complete() {
            return;
        }

        self.progress = if self.duration > 0.0 {
            (self.progress + dt / self.duration).min(1.0)
        } else {
            1.0
        };

        if self.is_complete() {
            self.current = self.target;
        } else {
            let eased = self.easing.apply(self.progress);
            self.current = self.start + (self.target - self.start) * eased;
        }
    }
}

/// Animated RGBA color.
#[derive(Debug, Clone)]
pub struct AnimatedColor {
    channels: [Animation; 4],
}

impl AnimatedColor {
    /// Creates a color resting at `color`.
    #[must_use]
    pub fn new(color: Color, easing: Easing) -> Self {
        Self {
            channels: color.to_array().map(|v| Animation::new(v, easing)),
        }
    }

    /// Sets the transition length of every channel.
    #[must_use]
    pub fn with_duration(self, duration: f32) -> Self {
        Self {
            channels: self.channels.map(|a| a.with_duration(duration)),
        }
    }

    /// Current color.
    #[must_use]
    pub fn value(&self) -> Color {
        let [r, g, b, a] = &self.channels;
        Color::rgba(r.value(), g.value(), b.value(), a.value())
    }

    /// Starts a transition towards `color`.
    pub fn set_target(&mut self, color: Color) {
        for (channel, v) in self.channels.iter_mut().zip(color.to_array()) {
            channel.set_target(v);
        }
    }

    /// Advances by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for channel in &mut self.channels {
            channel.update(dt);
        }
    }

    /// True once every channel rests.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.channels.iter().all(Animation::is_complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curves_hit_endpoints() {
        for easing in [Easing::Linear, Easing::CubicInOut] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
        assert!((Easing::CubicInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut anim = Animation::new(0.0, Easing::CubicInOut).with_duration(0.7);
        anim.set_target(1.0);

        anim.update(0.35);
        assert!((anim.value() - 0.5).abs() < 1e-3);
        assert!(!anim.is_complete());

        for _ in 0..30 {
            anim.update(0.016);
        }
        assert_eq!(anim.value(), 1.0);
        assert!(anim.is_complete());
    }

    #[test]
    fn test_color_fade() {
        let mut bg = AnimatedColor::new(Color::BLACK, Easing::Linear).with_duration(1.0);
        bg.set_target(Color::WHITE);

        bg.update(0.5);
        let mid = bg.value();
        assert!((mid.r - 0.5).abs() < 1e-4);
        assert_eq!(mid.a, 1.0);

        bg.update(0.5);
        assert!(bg.is_complete());
        assert_eq!(bg.value(), Color::WHITE);
    }
}
