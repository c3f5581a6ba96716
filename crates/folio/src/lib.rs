//! # FOLIO
//!
//! The portfolio site, integrating all crates.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                              FOLIO                               │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  ┌────────────────┐     ┌────────────────┐     ┌──────────────┐  │
//! │  │  folio_core    │────>│  folio_ui      │<────│  folio_site  │  │
//! │  │                │     │                │     │              │  │
//! │  │  • Field       │     │  • Backdrop    │     │  • Content   │  │
//! │  │  • Throttle    │     │  • Palettes    │     │  • Routes    │  │
//! │  │  • Links       │     │  • Surfaces    │     │  • Showcase  │  │
//! │  └────────────────┘     └───────┬────────┘     └──────┬───────┘  │
//! │                                 │                     │          │
//! │                       ┌─────────┴─────────────────────┴───────┐  │
//! │                       │  web (wasm32)   │   replay (native)   │  │
//! │                       └───────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `events`: Bounded input channel for the native replay
//! - `replay`: Headless trail replay with frame statistics
//! - `web`: Browser front end (wasm32 only)

pub mod events;

#[cfg(not(target_arch = "wasm32"))]
pub mod replay;

#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export the crates
pub use folio_core as core;
pub use folio_shared as shared;
pub use folio_site as site;
pub use folio_ui as ui;

// Re-export commonly used types
pub use events::{EventBus, EventReceiver, EventSender};
#[cfg(not(target_arch = "wasm32"))]
pub use replay::{ReplayConfig, ReplayStats, ReplaySummary};
