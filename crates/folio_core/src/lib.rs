//! # Folio Core
//!
//! The particle field behind the portfolio's cursor trail:
//! - Bounded active set (oldest-first eviction)
//! - Throttled spawning on pointer movement
//! - Constant-drift kinematics with linear fade-out
//! - Proximity links between live particles
//!
//! ## Frame Order
//!
//! ```text
//! pointer move ──> spawn (throttled, evicts oldest)
//!
//! frame tick ────> advance (drift, decay, retire) ──> links (pair sweep)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use folio_core::{FieldConfig, ParticleField};
//! use folio_shared::Vec2;
//!
//! let mut field = ParticleField::with_seed(FieldConfig::default(), 7);
//! field.spawn(Vec2::new(10.0, 10.0), 0.0);
//! field.advance();
//! assert_eq!(field.len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod field;

pub use config::FieldConfig;
pub use error::{CoreError, CoreResult};
pub use field::{
    link_alpha, AdvanceReport, FieldStats, Link, Particle, ParticleField, ParticleId,
    ParticleSampler, SpawnThrottle,
};
