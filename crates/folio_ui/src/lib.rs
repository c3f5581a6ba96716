//! # Folio UI
//!
//! The decorative side of the portfolio:
//! - The particle backdrop component (mount, input, frame, teardown)
//! - Flat render commands and the `Surface` they are drawn onto
//! - Dark and light palettes
//! - Colour cross-fades for theme changes
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     BACKDROP PIPELINE                    │
//! ├──────────────────────────────────────────────────────────┤
//! │  Host events → ParticleBackdrop → paint_field → Surface  │
//! │       ↓               ↓                ↓           ↓     │
//! │   Debounce      Field advance    RenderCommands  Canvas  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The backdrop sits behind all content and never takes pointer input.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod backdrop;
pub mod debounce;
pub mod input;
pub mod paint;
pub mod render;
pub mod style;

pub use animation::{AnimatedColor, Animation, Easing};
pub use backdrop::{BackdropStats, FrameReport, ParticleBackdrop};
pub use debounce::ResizeDebouncer;
pub use input::Key;
pub use paint::{paint_field, PaintCounts};
pub use render::{FrameRenderer, RecordingSurface, RenderCommand, Surface};
pub use style::{Color, Palette, ThemeMode};
