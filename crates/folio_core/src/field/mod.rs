//! # Particle Field
//!
//! The bounded set of cursor-trail particles.
//!
//! - `Particle` - one dot with constant drift and fading life
//! - `SpawnThrottle` - enforces the minimum spacing between spawns
//! - `ParticleSampler` - seeded drift and size sampling
//! - `ParticleField` - spawn, advance, retire and link

mod links;
mod particle;
mod sampler;
mod set;
mod throttle;

pub use links::{link_alpha, Link};
pub use particle::{Particle, ParticleId};
pub use sampler::ParticleSampler;
pub use set::{AdvanceReport, FieldStats, ParticleField};
pub use throttle::SpawnThrottle;
