//! # Folio Shared
//!
//! Common types used by the animator, the UI layer and the site model.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - `web-sys`
//! - `wasm-bindgen`
//! - Any browser-only crate
//!
//! If you need canvas types, put them in `folio::web`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod events;
pub mod math;

pub use constants::{
    GLOW_PADDING, LIFE_DECAY, LINK_DISTANCE, MAX_PARTICLES, RESIZE_DEBOUNCE_MS,
    RETAINED_PARTICLES, SPAWN_THROTTLE_MS,
};
pub use events::{InputEvent, Viewport};
pub use math::Vec2;
