//! The bounded active set.

use folio_shared::Vec2;

use super::links::{self, Link};
use super::particle::{Particle, ParticleId};
use super::sampler::ParticleSampler;
use super::throttle::SpawnThrottle;
use crate::config::FieldConfig;

/// Outcome of one `advance` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    /// Particles that moved and survived
    pub survived: usize,
    /// Particles retired this frame
    pub expired: usize,
}

/// Lifetime counters of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldStats {
    /// Particles created
    pub spawned: u64,
    /// Spawn requests rejected by the throttle
    pub throttled: u64,
    /// Particles dropped to respect the cap
    pub evicted: u64,
    /// Particles retired by decay
    pub expired: u64,
    /// `advance` calls
    pub frames: u64,
}

/// The cursor-trail particle set.
///
/// Holds at most `config.max_particles()` particles. Spawning evicts the oldest
/// first; advancing retires any particle whose life reaches zero.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    next_id: u64,
    throttle: SpawnThrottle,
    sampler: ParticleSampler,
    config: FieldConfig,
    stats: FieldStats,
}

impl ParticleField {
    /// Creates an empty field.
    #[must_use]
    pub fn new(config: FieldConfig, sampler: ParticleSampler) -> Self {
        Self {
            particles: Vec::with_capacity(config.max_particles()),
            next_id: 0,
            throttle: SpawnThrottle::new(config.spawn_throttle_ms),
            sampler,
            config,
            stats: FieldStats::default(),
        }
    }

    /// Creates an empty field with a deterministic sampler.
    #[must_use]
    pub fn with_seed(config: FieldConfig, seed: u64) -> Self {
        let sampler = ParticleSampler::from_seed(seed, &config);
        Self::new(config, sampler)
    }

    /// Creates an empty field seeded from platform entropy.
    #[must_use]
    pub fn from_entropy(config: FieldConfig) -> Self {
        let sampler = ParticleSampler::from_entropy(&config);
        Self::new(config, sampler)
    }

    /// Spawns a particle at `position` if the throttle allows it.
    ///
    /// Drift and size are sampled. Returns the new ID, or `None` if the
    /// request came too soon after the last accepted one.
    pub fn spawn(&mut self, position: Vec2, now_ms: f64) -> Option<ParticleId> {
        if !self.throttle.accept(now_ms) {
            self.stats.throttled += 1;
            return None;
        }
        let velocity = self.sampler.velocity();
        let size = self.sampler.size();
        Some(self.insert(position, velocity, size))
    }

    /// Appends a particle with explicit drift and size, bypassing the throttle.
    ///
    /// Still evicts the oldest particles to respect the cap.
    pub fn insert(&mut self, position: Vec2, velocity: Vec2, size: f32) -> ParticleId {
        let retained = self.config.retained_particles();
        if self.particles.len() > retained {
            let excess = self.particles.len() - retained;
            self.particles.drain(..excess);
            self.stats.evicted += excess as u64;
        }

        let id = ParticleId(self.next_id);
        self.next_id += 1;
        self.particles.push(Particle::new(id, position, velocity, size));
        self.stats.spawned += 1;

        tracing::trace!(id = id.raw(), x = position.x, y = position.y, "particle spawned");
        id
    }

    /// Moves every particle by its drift, fades it, and retires the dead.
    pub fn advance(&mut self) -> AdvanceReport {
        let decay = self.config.life_decay;
        let before = self.particles.len();
        self.particles.retain_mut(|p| p.step(decay));

        let survived = self.particles.len();
        let expired = before - survived;
        self.stats.expired += expired as u64;
        self.stats.frames += 1;

        AdvanceReport { survived, expired }
    }

    /// Every unordered pair of live particles closer than the link distance.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        links::sweep(
            &self.particles,
            self.config.link_distance,
            self.config.link_alpha_scale,
        )
    }

    /// Live particles, oldest first.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Looks up a live particle.
    #[must_use]
    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True if no particle is alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The tuning this field runs with.
    #[must_use]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Lifetime counters.
    #[must_use]
    pub fn stats(&self) -> FieldStats {
        self.stats
    }

    /// Drops every particle and re-opens the throttle. IDs keep increasing.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.throttle.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> ParticleField {
        ParticleField::with_seed(FieldConfig::default(), 1234)
    }

    #[test]
    fn test_spawn_at_pointer() {
        let mut field = field();
        let id = field.spawn(Vec2::new(320.0, 240.0), 0.0).unwrap();

        let p = field.get(id).unwrap();
        assert_eq!(p.position, Vec2::new(320.0, 240.0));
        assert_eq!(p.life, 1.0);
        assert!((2.0..5.0).contains(&p.size));
        assert!(p.velocity.x.abs() <= 0.5 && p.velocity.y.abs() <= 0.5);
    }

    #[test]
    fn test_ids_increase_and_never_repeat() {
        let mut field = field();
        let mut last = None;
        for i in 0..100 {
            let id = field.spawn(Vec2::ZERO, f64::from(i) * 40.0).unwrap();
            if let Some(prev) = last {
                assert!(id > prev);
            }
            last = Some(id);
        }
        field.clear();
        let after_clear = field.spawn(Vec2::ZERO, 10_000.0).unwrap();
        assert!(after_clear > last.unwrap());
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut field = field();
        let ids: Vec<ParticleId> = (0..30)
            .map(|i| field.insert(Vec2::new(i as f32, 0.0), Vec2::ZERO, 3.0))
            .collect();

        assert_eq!(field.len(), 26);
        // Survivors are the 26 newest, in order
        let live: Vec<ParticleId> = field.particles().iter().map(|p| p.id).collect();
        assert_eq!(live, ids[4..].to_vec());
        assert_eq!(field.stats().evicted, 4);
    }

    #[test]
    fn test_throttled_spawn_counts() {
        let mut field = field();
        assert!(field.spawn(Vec2::ZERO, 0.0).is_some());
        assert!(field.spawn(Vec2::ZERO, 39.0).is_none());
        assert!(field.spawn(Vec2::ZERO, 40.0).is_some());

        let stats = field.stats();
        assert_eq!(stats.spawned, 2);
        assert_eq!(stats.throttled, 1);
    }

    #[test]
    fn test_advance_decays_and_drifts() {
        let mut field = field();
        let id = field.insert(Vec2::new(10.0, 10.0), Vec2::new(0.5, -0.5), 3.0);

        let report = field.advance();
        assert_eq!(report, AdvanceReport { survived: 1, expired: 0 });

        let p = field.get(id).unwrap();
        assert_eq!(p.position, Vec2::new(10.5, 9.5));
        assert!((p.life - 0.988).abs() < 1e-6);
    }

    #[test]
    fn test_particle_retired_after_84_frames() {
        let mut field = field();
        field.insert(Vec2::ZERO, Vec2::ZERO, 3.0);

        for _ in 0..83 {
            field.advance();
        }
        assert_eq!(field.len(), 1, "still alive after 83 frames");

        let report = field.advance();
        assert_eq!(report.expired, 1);
        assert!(field.is_empty());
        assert_eq!(field.stats().expired, 1);
        assert_eq!(field.stats().frames, 84);
    }

    #[test]
    fn test_links_follow_active_set() {
        let mut field = field();
        field.insert(Vec2::new(0.0, 0.0), Vec2::ZERO, 3.0);
        field.insert(Vec2::new(100.0, 0.0), Vec2::ZERO, 3.0);
        field.insert(Vec2::new(1000.0, 1000.0), Vec2::ZERO, 3.0);

        let links: Vec<Link> = field.links().collect();
        assert_eq!(links.len(), 1);
        assert!((links[0].distance - 100.0).abs() < 1e-4);
        assert!((links[0].alpha - 1.0 / 6.0).abs() < 1e-5);
    }
}
