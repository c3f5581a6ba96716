//! The whole site as one state object.
//!
//! `PortfolioApp` owns the content, the preference store, the theme and the
//! per-page state. Hosts feed it paths, keys and clock ticks and read the
//! state back to draw.

use folio_shared::constants::THEME_FADE_SECS;
use folio_ui::{AnimatedColor, Color, Easing, Key, ThemeMode};

use crate::contact::ContactForm;
use crate::content::Portfolio;
use crate::error::SiteResult;
use crate::preferences::{load_theme, save_theme, PlaygroundSize, PreferenceStore};
use crate::routes::{resolve, Resolution, Route};
use crate::showcase::{ShowcaseEffect, ShowcaseOverlay, ShowcasePage, ShowcaseTab, ToolbarAction};

/// Route-specific state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// Page with no local state.
    Plain,
    /// Overlay on the work grid.
    Overlay(ShowcaseOverlay),
    /// Full-page showcase.
    Full(ShowcasePage),
}

/// The portfolio site.
pub struct PortfolioApp<S: PreferenceStore> {
    content: Portfolio,
    store: S,
    theme: ThemeMode,
    background: AnimatedColor,
    route: Route,
    page: PageState,
    contact: ContactForm,
}

impl<S: PreferenceStore> PortfolioApp<S> {
    /// Starts the site with the embedded content, on the home page.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded content is invalid.
    pub fn new(store: S) -> SiteResult<Self> {
        Ok(Self::with_content(Portfolio::embedded()?, store))
    }

    /// Starts the site with the given content, on the home page.
    pub fn with_content(content: Portfolio, store: S) -> Self {
        let theme = load_theme(&store);
        let background = AnimatedColor::new(theme.palette().background, Easing::CubicInOut)
            .with_duration(THEME_FADE_SECS);
        tracing::info!(theme = theme.as_str(), projects = content.projects.len(), "site started");

        Self {
            content,
            store,
            theme,
            background,
            route: Route::Home,
            page: PageState::Plain,
            contact: ContactForm::new(),
        }
    }

    /// Goes to a path, following redirects.
    pub fn navigate(&mut self, path: &str) -> Resolution {
        let resolution = resolve(path, &self.content);
        self.enter(resolution.route.clone());
        resolution
    }

    fn enter(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        self.page = match &route {
            Route::Showcase { id } => PageState::Overlay(ShowcaseOverlay::new(id.as_str())),
            Route::ShowcaseFull { id } => {
                PageState::Full(ShowcasePage::new(id.as_str(), self.theme, &self.store))
            }
            _ => PageState::Plain,
        };
        tracing::debug!(path = %route.path(), "route entered");
        self.route = route;
    }

    /// Current route.
    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Current path.
    #[must_use]
    pub fn path(&self) -> String {
        self.route.path()
    }

    /// Route-specific state.
    #[must_use]
    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// Overlay state, when on `/work/:id`.
    #[must_use]
    pub fn overlay(&self) -> Option<&ShowcaseOverlay> {
        match &self.page {
            PageState::Overlay(overlay) => Some(overlay),
            _ => None,
        }
    }

    /// Full-page showcase state, when on `/work/:id/full`.
    #[must_use]
    pub fn showcase_page(&self) -> Option<&ShowcasePage> {
        match &self.page {
            PageState::Full(page) => Some(page),
            _ => None,
        }
    }

    /// Mutable full-page showcase state.
    pub fn showcase_page_mut(&mut self) -> Option<&mut ShowcasePage> {
        match &mut self.page {
            PageState::Full(page) => Some(page),
            _ => None,
        }
    }

    /// Site theme.
    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// True in dark mode. The backdrop follows this flag.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Page background, mid cross-fade after a theme change.
    #[must_use]
    pub fn background(&self) -> Color {
        self.background.value()
    }

    /// Switches theme, persists it and starts the background fade.
    pub fn set_theme(&mut self, theme: ThemeMode) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        save_theme(&mut self.store, theme);
        self.background.set_target(theme.palette().background);
        if let PageState::Full(page) = &mut self.page {
            page.playground_mut().sync_theme(theme);
        }
        tracing::debug!(theme = theme.as_str(), "theme changed");
    }

    /// Flips the theme.
    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }

    /// Keyboard input. Only the showcase pages react.
    pub fn handle_key(&mut self, key: Key) {
        let effect = match &mut self.page {
            PageState::Overlay(overlay) => overlay.handle_key(key),
            PageState::Full(page) => page.handle_key(key),
            PageState::Plain => None,
        };
        if let Some(effect) = effect {
            self.apply(effect);
        }
    }

    /// Overlay toolbar press. Ignored off the overlay.
    pub fn toolbar(&mut self, action: ToolbarAction) {
        let PageState::Overlay(overlay) = &mut self.page else {
            return;
        };
        if let Some(effect) = overlay.toolbar(action) {
            self.apply(effect);
        }
    }

    /// Close or back button of either showcase. Ignored elsewhere.
    pub fn close_showcase(&mut self) {
        let effect = match &self.page {
            PageState::Overlay(overlay) => overlay.close(),
            PageState::Full(page) => page.back(),
            PageState::Plain => return,
        };
        self.apply(effect);
    }

    /// Selects a tab on the full-page showcase.
    pub fn select_tab(&mut self, tab: ShowcaseTab) {
        if let Some(page) = self.showcase_page_mut() {
            page.select(tab);
        }
    }

    /// Picks the playground size on the full-page showcase and persists it.
    pub fn set_playground_size(&mut self, size: PlaygroundSize) {
        if let PageState::Full(page) = &mut self.page {
            page.playground_mut().set_size(size, &mut self.store);
        }
    }

    /// Picks the playground preview theme. The site theme is untouched.
    pub fn set_playground_theme(&mut self, theme: ThemeMode) {
        if let Some(page) = self.showcase_page_mut() {
            page.playground_mut().set_theme(theme);
        }
    }

    /// Shows or hides the playground code panel.
    pub fn set_playground_code(&mut self, show: bool) {
        if let Some(page) = self.showcase_page_mut() {
            page.playground_mut().set_show_code(show);
        }
    }

    fn apply(&mut self, effect: ShowcaseEffect) {
        match effect {
            ShowcaseEffect::Navigate(route) => self.enter(route),
            ShowcaseEffect::ToggleTheme => self.toggle_theme(),
        }
    }

    /// Contact form.
    #[must_use]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Mutable contact form.
    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    /// Clock tick: runs timers and the background fade.
    pub fn tick(&mut self, now_ms: f64, dt_secs: f32) {
        self.contact.tick(now_ms);
        self.background.update(dt_secs);
    }

    /// Content tables.
    #[must_use]
    pub fn content(&self) -> &Portfolio {
        &self.content
    }

    /// Preference store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
