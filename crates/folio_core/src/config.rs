//! Tuning for the particle field.
//!
//! Every field defaults to the constant baked into `folio_shared::constants`,
//! so an empty TOML document yields the stock backdrop. Loaded once at
//! startup; the field never re-reads it.
//!
//! ```toml
//! spawn_throttle_ms = 40.0
//! retained = 25
//! life_decay = 0.012
//! link_distance = 150.0
//! ```

use std::path::Path;

use folio_shared::constants::{
    CORE_ALPHA, GLOW_ALPHA, GLOW_PADDING, LIFE_DECAY, LINK_ALPHA_SCALE, LINK_DISTANCE, LINK_WIDTH,
    RESIZE_DEBOUNCE_MS, RETAINED_PARTICLES, SIZE_MAX, SIZE_MIN, SPAWN_THROTTLE_MS,
    VELOCITY_SPREAD,
};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Tuning values for spawning, decay, linking and drawing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    /// Minimum spacing between accepted spawns (ms).
    pub spawn_throttle_ms: f64,
    /// Particles kept before a new one is appended. At most
    /// `RETAINED_PARTICLES`, so the live set never exceeds 26.
    pub retained: usize,
    /// Life removed per frame.
    pub life_decay: f32,
    /// Pairs closer than this are linked (px).
    pub link_distance: f32,
    /// Link alpha at zero distance between two full-life particles.
    pub link_alpha_scale: f32,
    /// Link stroke width (px).
    pub link_width: f32,
    /// Glow radius over core radius (px).
    pub glow_padding: f32,
    /// Glow alpha at full life.
    pub glow_alpha: f32,
    /// Core alpha at full life.
    pub core_alpha: f32,
    /// Half-width of the per-axis drift range.
    pub velocity_spread: f32,
    /// Smallest core radius (inclusive).
    pub size_min: f32,
    /// Largest core radius (exclusive).
    pub size_max: f32,
    /// Quiet period before a resize is applied (ms).
    pub resize_debounce_ms: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            spawn_throttle_ms: SPAWN_THROTTLE_MS,
            retained: RETAINED_PARTICLES,
            life_decay: LIFE_DECAY,
            link_distance: LINK_DISTANCE,
            link_alpha_scale: LINK_ALPHA_SCALE,
            link_width: LINK_WIDTH,
            glow_padding: GLOW_PADDING,
            glow_alpha: GLOW_ALPHA,
            core_alpha: CORE_ALPHA,
            velocity_spread: VELOCITY_SPREAD,
            size_min: SIZE_MIN,
            size_max: SIZE_MAX,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}

impl FieldConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed TOML or unknown keys and
    /// `InvalidConfig` for out-of-range values.
    pub fn from_toml_str(source: &str) -> CoreResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a tuning file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigRead` if the file cannot be read, otherwise see
    /// [`FieldConfig::from_toml_str`].
    pub fn load(path: &Path) -> CoreResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| CoreError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!(path = %path.display(), "loaded field config");
        Ok(config)
    }

    /// Particles kept before a spawn, clamped to `RETAINED_PARTICLES` for
    /// configs built without [`FieldConfig::validate`].
    #[must_use]
    pub const fn retained_particles(&self) -> usize {
        if self.retained > RETAINED_PARTICLES {
            RETAINED_PARTICLES
        } else {
            self.retained
        }
    }

    /// Hard cap on live particles.
    #[must_use]
    pub const fn max_particles(&self) -> usize {
        self.retained_particles() + 1
    }

    /// Checks every value against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first offending key.
    pub fn validate(&self) -> CoreResult<()> {
        fn invalid(msg: &str) -> CoreResult<()> {
            Err(CoreError::InvalidConfig(msg.to_string()))
        }

        if !(self.spawn_throttle_ms.is_finite() && self.spawn_throttle_ms >= 0.0) {
            return invalid("spawn_throttle_ms must be a non-negative number");
        }
        if self.retained > RETAINED_PARTICLES {
            return Err(CoreError::InvalidConfig(format!(
                "retained must be at most {RETAINED_PARTICLES}"
            )));
        }
        if !(self.life_decay.is_finite() && self.life_decay > 0.0) {
            return invalid("life_decay must be positive");
        }
        if !(self.link_distance.is_finite() && self.link_distance > 0.0) {
            return invalid("link_distance must be positive");
        }
        for (name, alpha) in [
            ("link_alpha_scale", self.link_alpha_scale),
            ("glow_alpha", self.glow_alpha),
            ("core_alpha", self.core_alpha),
        ] {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(CoreError::InvalidConfig(format!("{name} must be within [0, 1]")));
            }
        }
        if !(self.link_width.is_finite() && self.link_width >= 0.0) {
            return invalid("link_width must be non-negative");
        }
        if !(self.glow_padding.is_finite() && self.glow_padding >= 0.0) {
            return invalid("glow_padding must be non-negative");
        }
        if !(self.velocity_spread.is_finite() && self.velocity_spread >= 0.0) {
            return invalid("velocity_spread must be non-negative");
        }
        if !(self.size_min.is_finite() && self.size_min >= 0.0 && self.size_min < self.size_max) {
            return invalid("size range must satisfy 0 <= size_min < size_max");
        }
        if !self.size_max.is_finite() {
            return invalid("size_max must be finite");
        }
        if !(self.resize_debounce_ms.is_finite() && self.resize_debounce_ms >= 0.0) {
            return invalid("resize_debounce_ms must be a non-negative number");
        }
        Ok(())
    }
}
