//! # Baked-in Constants
//!
//! Behavioural constants of the particle backdrop and the site.
//!
//! **NOTE:** The animator values are kept literally. They are the defaults of
//! `folio_core::FieldConfig`; a tuning file may override them at startup.

// =============================================================================
// PARTICLE BACKDROP
// =============================================================================

/// Minimum spacing between two accepted spawns (milliseconds).
pub const SPAWN_THROTTLE_MS: f64 = 40.0;

/// Particles kept from the old set before a new one is appended.
pub const RETAINED_PARTICLES: usize = 25;

/// Hard cap on live particles (retained + the new one).
pub const MAX_PARTICLES: usize = RETAINED_PARTICLES + 1;

/// Life removed from every particle each frame.
pub const LIFE_DECAY: f32 = 0.012;

/// Pairs closer than this (pixels) are linked.
pub const LINK_DISTANCE: f32 = 150.0;

/// Link alpha at distance zero between two full-life particles.
pub const LINK_ALPHA_SCALE: f32 = 0.5;

/// Stroke width of a link (pixels).
pub const LINK_WIDTH: f32 = 1.2;

/// Extra radius of the glow circle over the core circle (pixels).
pub const GLOW_PADDING: f32 = 2.0;

/// Glow alpha at full life.
pub const GLOW_ALPHA: f32 = 0.2;

/// Core alpha at full life.
pub const CORE_ALPHA: f32 = 0.8;

/// Per-axis drift is sampled from `[-VELOCITY_SPREAD, VELOCITY_SPREAD)`.
pub const VELOCITY_SPREAD: f32 = 0.5;

/// Smallest core radius (pixels, inclusive).
pub const SIZE_MIN: f32 = 2.0;

/// Largest core radius (pixels, exclusive).
pub const SIZE_MAX: f32 = 5.0;

/// Quiet period before a viewport resize is applied (milliseconds).
pub const RESIZE_DEBOUNCE_MS: f64 = 100.0;

// =============================================================================
// SITE
// =============================================================================

/// Local storage key for the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Local storage key for the showcase playground size.
pub const SHOWCASE_SIZE_STORAGE_KEY: &str = "showcase-size";

/// How long the contact form shows "Message Sent!" (milliseconds).
pub const CONTACT_RESET_MS: f64 = 3000.0;

/// Duration of the page background cross-fade on theme change (seconds).
pub const THEME_FADE_SECS: f32 = 0.7;
