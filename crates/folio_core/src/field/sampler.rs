//! Random drift and size for new particles.

use folio_shared::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::FieldConfig;

/// Fallback seed when the platform has no entropy source.
const FALLBACK_SEED: u64 = 0x00F0_110F_0110;

/// Samples drift and core radius for new particles.
///
/// Uses ChaCha8 so a replay with the same seed draws the same trail.
#[derive(Debug, Clone)]
pub struct ParticleSampler {
    rng: ChaCha8Rng,
    velocity_spread: f32,
    size_min: f32,
    size_max: f32,
}

impl ParticleSampler {
    /// Creates a deterministic sampler.
    #[must_use]
    pub fn from_seed(seed: u64, config: &FieldConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            velocity_spread: config.velocity_spread,
            size_min: config.size_min,
            size_max: config.size_max,
        }
    }

    /// Creates a sampler seeded from the platform entropy source.
    ///
    /// Falls back to a fixed seed if entropy is unavailable. The trail is
    /// decorative, so a predictable one is acceptable.
    #[must_use]
    pub fn from_entropy(config: &FieldConfig) -> Self {
        let mut bytes = [0u8; 8];
        let seed = match getrandom::fill(&mut bytes) {
            Ok(()) => u64::from_le_bytes(bytes),
            Err(e) => {
                tracing::warn!(error = %e, "no entropy source, using fallback seed");
                FALLBACK_SEED
            }
        };
        Self::from_seed(seed, config)
    }

    /// Drift in `[-spread, spread)` on each axis.
    pub fn velocity(&mut self) -> Vec2 {
        let s = self.velocity_spread;
        if s <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(self.rng.gen_range(-s..s), self.rng.gen_range(-s..s))
    }

    /// Core radius in `[size_min, size_max)`.
    pub fn size(&mut self) -> f32 {
        if self.size_min >= self.size_max {
            return self.size_min;
        }
        self.rng.gen_range(self.size_min..self.size_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        let mut sampler = ParticleSampler::from_seed(42, &FieldConfig::default());
        for _ in 0..1000 {
            let v = sampler.velocity();
            assert!((-0.5..0.5).contains(&v.x), "vx out of range: {}", v.x);
            assert!((-0.5..0.5).contains(&v.y), "vy out of range: {}", v.y);

            let size = sampler.size();
            assert!((2.0..5.0).contains(&size), "size out of range: {size}");
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        let config = FieldConfig::default();
        let mut a = ParticleSampler::from_seed(9, &config);
        let mut b = ParticleSampler::from_seed(9, &config);
        for _ in 0..10 {
            assert_eq!(a.velocity(), b.velocity());
            assert_eq!(a.size(), b.size());
        }
    }

    #[test]
    fn test_zero_spread_is_still() {
        let config = FieldConfig {
            velocity_spread: 0.0,
            ..FieldConfig::default()
        };
        let mut sampler = ParticleSampler::from_seed(1, &config);
        assert_eq!(sampler.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_entropy_sampler_in_range() {
        let mut sampler = ParticleSampler::from_entropy(&FieldConfig::default());
        let size = sampler.size();
        assert!((2.0..5.0).contains(&size));
    }
}
