//! A single trail particle.

use folio_shared::Vec2;

/// Identifier of a particle. Never reused by the field that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(pub u64);

impl ParticleId {
    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// One dot of the trail.
///
/// Drift and size are fixed at creation. Only position and life change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Unique ID
    pub id: ParticleId,
    /// Viewport position (px)
    pub position: Vec2,
    /// Per-frame drift (px)
    pub velocity: Vec2,
    /// Remaining visibility, 1.0 at birth
    pub life: f32,
    /// Core radius (px)
    pub size: f32,
}

impl Particle {
    /// Life of a freshly spawned particle.
    pub const FULL_LIFE: f32 = 1.0;

    /// Creates a particle at full life.
    #[must_use]
    pub const fn new(id: ParticleId, position: Vec2, velocity: Vec2, size: f32) -> Self {
        Self {
            id,
            position,
            velocity,
            life: Self::FULL_LIFE,
            size,
        }
    }

    /// Is this particle still visible?
    #[inline]
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Moves by one frame of drift and fades by `decay`.
    ///
    /// Returns true if the particle survives the step.
    #[inline]
    pub fn step(&mut self, decay: f32) -> bool {
        self.position += self.velocity;
        self.life -= decay;
        self.is_alive()
    }
}
