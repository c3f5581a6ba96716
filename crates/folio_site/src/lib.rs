//! # Folio Site
//!
//! The portfolio as plain state:
//! - Content tables embedded as TOML
//! - Theme and playground preferences behind [`PreferenceStore`]
//! - Route table with redirects, navigation bar
//! - Contact form with its three-second confirmation
//! - Showcase overlay and full-page showcase
//!
//! [`PortfolioApp`] ties them together. Nothing here touches the DOM.
//!
//! ## Example
//!
//! ```rust
//! use folio_site::{MemoryStore, PortfolioApp, Route};
//!
//! let mut app = PortfolioApp::new(MemoryStore::new()).unwrap();
//! let resolution = app.navigate("/work/does-not-exist");
//! assert!(resolution.redirected);
//! assert_eq!(app.route(), &Route::Work);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod app;
pub mod contact;
pub mod content;
pub mod error;
pub mod preferences;
pub mod routes;
pub mod showcase;

pub use app::{PageState, PortfolioApp};
pub use contact::{ContactField, ContactForm};
pub use content::{ContactLink, ImpactMetric, Portfolio, Principle, Project, Skill};
pub use error::{SiteError, SiteResult};
pub use preferences::{MemoryStore, PlaygroundSize, PreferenceStore};
pub use routes::{active_entry, resolve, NavEntry, Resolution, Route, NAV_ENTRIES};
pub use showcase::{
    Drawer, Playground, ShowcaseEffect, ShowcaseOverlay, ShowcasePage, ShowcaseTab, ToolbarAction,
};
