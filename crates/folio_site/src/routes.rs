//! Routes, redirects and the navigation bar.
//!
//! | Path               | Route            |
//! |--------------------|------------------|
//! | `/`                | Home             |
//! | `/work`            | Work             |
//! | `/work/:id`        | Showcase overlay |
//! | `/work/:id/full`   | Full-page showcase |
//! | `/about`           | About            |
//! | `/contact`         | Contact          |
//!
//! A showcase path naming an unknown project redirects to `/work`. Anything
//! else unknown redirects home.

use crate::content::Portfolio;

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Landing page.
    #[default]
    Home,
    /// Project grid.
    Work,
    /// Project overlay on top of the work grid.
    Showcase {
        /// Project slug.
        id: String,
    },
    /// Project case study as its own page.
    ShowcaseFull {
        /// Project slug.
        id: String,
    },
    /// About page.
    About,
    /// Contact page.
    Contact,
}

impl Route {
    /// Canonical path.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".into(),
            Self::Work => "/work".into(),
            Self::Showcase { id } => format!("/work/{id}"),
            Self::ShowcaseFull { id } => format!("/work/{id}/full"),
            Self::About => "/about".into(),
            Self::Contact => "/contact".into(),
        }
    }

    /// Project slug for showcase routes.
    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        match self {
            Self::Showcase { id } | Self::ShowcaseFull { id } => Some(id),
            _ => None,
        }
    }

    /// Matches a path against the route table without checking project ids.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = normalize(path);
        let mut segments = path.split('/').skip(1);

        let route = match (segments.next(), segments.next(), segments.next()) {
            (Some(""), None, None) => Self::Home,
            (Some("work"), None, None) => Self::Work,
            (Some("work"), Some(id), None) => Self::Showcase { id: id.to_owned() },
            (Some("work"), Some(id), Some("full")) => Self::ShowcaseFull { id: id.to_owned() },
            (Some("about"), None, None) => Self::About,
            (Some("contact"), None, None) => Self::Contact,
            _ => return None,
        };

        if segments.next().is_some() || route.project_id() == Some("") {
            return None;
        }
        Some(route)
    }
}

/// Strips query, fragment and trailing slashes. Empty becomes `/`.
#[must_use]
pub fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Page to show.
    pub route: Route,
    /// True if the requested path was replaced.
    pub redirected: bool,
}

/// Resolves a path against the route table and the project list.
#[must_use]
pub fn resolve(path: &str, portfolio: &Portfolio) -> Resolution {
    let Some(route) = Route::parse(path) else {
        let redirect_to = if normalize(path).starts_with("/work/") {
            Route::Work
        } else {
            Route::Home
        };
        tracing::debug!(path, to = %redirect_to.path(), "unknown path, redirecting");
        return Resolution {
            route: redirect_to,
            redirected: true,
        };
    };

    match route.project_id() {
        Some(id) if portfolio.project(id).is_none() => {
            tracing::debug!(path, id, "unknown project, redirecting to /work");
            Resolution {
                route: Route::Work,
                redirected: true,
            }
        }
        _ => Resolution {
            route,
            redirected: false,
        },
    }
}

/// An entry of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    /// Label.
    pub label: &'static str,
    /// Target path.
    pub path: &'static str,
}

impl NavEntry {
    /// True iff `current` is exactly this entry's path.
    #[must_use]
    pub fn is_active(&self, current: &str) -> bool {
        normalize(current) == self.path
    }
}

/// The navigation bar, left to right.
pub const NAV_ENTRIES: [NavEntry; 4] = [
    NavEntry {
        label: "Home",
        path: "/",
    },
    NavEntry {
        label: "Work",
        path: "/work",
    },
    NavEntry {
        label: "About",
        path: "/about",
    },
    NavEntry {
        label: "Contact",
        path: "/contact",
    },
];

/// The active navigation entry, if any.
#[must_use]
pub fn active_entry(current: &str) -> Option<&'static NavEntry> {
    NAV_ENTRIES.iter().find(|e| e.is_active(current))
}
