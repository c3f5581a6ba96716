//! Interactive project showcase.
//!
//! Two presentations of one case study:
//! - [`ShowcaseOverlay`] at `/work/:id`, with three drawers and a code panel
//!   driven by a toolbar and number keys
//! - [`ShowcasePage`] at `/work/:id/full`, with four tabs and a playground
//!
//! Both report navigation and theme changes as [`ShowcaseEffect`]s and leave
//! applying them to the app.

use folio_ui::{Key, ThemeMode};

use crate::preferences::{load_playground_size, save_playground_size, PlaygroundSize, PreferenceStore};
use crate::routes::Route;

/// Something the showcase asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseEffect {
    /// Go to another route.
    Navigate(Route),
    /// Flip the site theme.
    ToggleTheme,
}

/// Side panels of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drawer {
    /// Left drawer, key `1`.
    Principles,
    /// Bottom drawer, key `2`.
    Impact,
    /// Right drawer, key `3`.
    System,
}

/// Toolbar buttons of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
    /// Open or close a drawer.
    Toggle(Drawer),
    /// Show or hide the code panel.
    ToggleCode,
    /// Flip the site theme.
    ToggleTheme,
    /// Switch to the full-page showcase.
    OpenFullPage,
}

impl ToolbarAction {
    /// Parses a button name: `principles`, `impact`, `system`, `code`,
    /// `theme` or `full`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "principles" => Some(Self::Toggle(Drawer::Principles)),
            "impact" => Some(Self::Toggle(Drawer::Impact)),
            "system" => Some(Self::Toggle(Drawer::System)),
            "code" => Some(Self::ToggleCode),
            "theme" => Some(Self::ToggleTheme),
            "full" => Some(Self::OpenFullPage),
            _ => None,
        }
    }
}

/// The `/work/:id` overlay. Everything starts closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseOverlay {
    project_id: String,
    principles: bool,
    impact: bool,
    system: bool,
    code: bool,
}

impl ShowcaseOverlay {
    /// Opens the overlay for a project.
    #[must_use]
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            principles: false,
            impact: false,
            system: false,
            code: false,
        }
    }

    /// Project shown.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// True if the drawer is open.
    #[must_use]
    pub fn is_open(&self, drawer: Drawer) -> bool {
        match drawer {
            Drawer::Principles => self.principles,
            Drawer::Impact => self.impact,
            Drawer::System => self.system,
        }
    }

    /// True if the code panel is shown.
    #[must_use]
    pub fn shows_code(&self) -> bool {
        self.code
    }

    /// Opens or closes a drawer. Drawers are independent.
    pub fn toggle(&mut self, drawer: Drawer) {
        let open = match drawer {
            Drawer::Principles => &mut self.principles,
            Drawer::Impact => &mut self.impact,
            Drawer::System => &mut self.system,
        };
        *open = !*open;
    }

    /// Shows or hides the code panel.
    pub fn toggle_code(&mut self) {
        self.code = !self.code;
    }

    /// Keyboard shortcuts: `Escape` closes, `1`/`2`/`3` toggle drawers, `c` toggles code.
    pub fn handle_key(&mut self, key: Key) -> Option<ShowcaseEffect> {
        match key {
            Key::Escape => return Some(ShowcaseEffect::Navigate(Route::Work)),
            Key::Digit1 => self.toggle(Drawer::Principles),
            Key::Digit2 => self.toggle(Drawer::Impact),
            Key::Digit3 => self.toggle(Drawer::System),
            Key::C => self.toggle_code(),
            Key::ArrowLeft | Key::ArrowRight => {}
        }
        None
    }

    /// Toolbar button press.
    pub fn toolbar(&mut self, action: ToolbarAction) -> Option<ShowcaseEffect> {
        match action {
            ToolbarAction::Toggle(drawer) => self.toggle(drawer),
            ToolbarAction::ToggleCode => self.toggle_code(),
            ToolbarAction::ToggleTheme => return Some(ShowcaseEffect::ToggleTheme),
            ToolbarAction::OpenFullPage => {
                return Some(ShowcaseEffect::Navigate(Route::ShowcaseFull {
                    id: self.project_id.clone(),
                }))
            }
        }
        None
    }

    /// Close button.
    #[must_use]
    pub fn close(&self) -> ShowcaseEffect {
        ShowcaseEffect::Navigate(Route::Work)
    }
}

/// Tabs of the full-page showcase, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShowcaseTab {
    /// Interactive component gallery.
    #[default]
    Components,
    /// Design principles.
    Principles,
    /// Impact metrics.
    Impact,
    /// Behind the system.
    System,
}

impl ShowcaseTab {
    /// Every tab, left to right.
    pub const ALL: [Self; 4] = [Self::Components, Self::Principles, Self::Impact, Self::System];

    /// Tab name as used by hosts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Components => "components",
            Self::Principles => "principles",
            Self::Impact => "impact",
            Self::System => "system",
        }
    }

    /// Parses a tab name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.as_str() == name)
    }

    const fn index(self) -> usize {
        self as usize
    }

    /// Tab to the right, or this one at the end.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL.get(self.index() + 1).copied().unwrap_or(self)
    }

    /// Tab to the left, or this one at the start.
    #[must_use]
    pub fn previous(self) -> Self {
        self.index()
            .checked_sub(1)
            .map_or(self, |i| Self::ALL[i])
    }
}

/// Preview controls of the full-page showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playground {
    theme: ThemeMode,
    size: PlaygroundSize,
    show_code: bool,
}

impl Playground {
    /// Creates controls following the site theme, with the stored size if valid.
    pub fn new(site_theme: ThemeMode, store: &impl PreferenceStore) -> Self {
        Self {
            theme: site_theme,
            size: load_playground_size(store).unwrap_or_default(),
            show_code: false,
        }
    }

    /// Preview theme.
    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Preview size.
    #[must_use]
    pub fn size(&self) -> PlaygroundSize {
        self.size
    }

    /// True if the code panel is shown.
    #[must_use]
    pub fn shows_code(&self) -> bool {
        self.show_code
    }

    /// Local theme pick. Does not touch the site theme.
    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    /// Called whenever the site theme changes; overrides the local pick.
    pub fn sync_theme(&mut self, site_theme: ThemeMode) {
        self.theme = site_theme;
    }

    /// Picks a size and persists it.
    pub fn set_size(&mut self, size: PlaygroundSize, store: &mut impl PreferenceStore) {
        self.size = size;
        save_playground_size(store, size);
    }

    /// Shows or hides the code panel.
    pub fn set_show_code(&mut self, show: bool) {
        self.show_code = show;
    }
}

/// The `/work/:id/full` page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcasePage {
    project_id: String,
    tab: ShowcaseTab,
    playground: Playground,
}

impl ShowcasePage {
    /// Opens the page on the first tab.
    pub fn new(
        project_id: impl Into<String>,
        site_theme: ThemeMode,
        store: &impl PreferenceStore,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            tab: ShowcaseTab::default(),
            playground: Playground::new(site_theme, store),
        }
    }

    /// Project shown.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Selected tab.
    #[must_use]
    pub fn tab(&self) -> ShowcaseTab {
        self.tab
    }

    /// Selects a tab directly.
    pub fn select(&mut self, tab: ShowcaseTab) {
        self.tab = tab;
    }

    /// Playground controls.
    #[must_use]
    pub fn playground(&self) -> &Playground {
        &self.playground
    }

    /// Mutable playground controls.
    pub fn playground_mut(&mut self) -> &mut Playground {
        &mut self.playground
    }

    /// Keyboard: arrows move one tab and stop at the ends, `Escape` leaves.
    pub fn handle_key(&mut self, key: Key) -> Option<ShowcaseEffect> {
        match key {
            Key::Escape => return Some(ShowcaseEffect::Navigate(Route::Work)),
            Key::ArrowRight => self.tab = self.tab.next(),
            Key::ArrowLeft => self.tab = self.tab.previous(),
            Key::Digit1 | Key::Digit2 | Key::Digit3 | Key::C => {}
        }
        None
    }

    /// Back button.
    #[must_use]
    pub fn back(&self) -> ShowcaseEffect {
        ShowcaseEffect::Navigate(Route::Work)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryStore;

    #[test]
    fn test_overlay_keys_toggle_drawers() {
        let mut overlay = ShowcaseOverlay::new("lazr");
        assert!(!overlay.is_open(Drawer::Principles));

        assert_eq!(overlay.handle_key(Key::Digit1), None);
        assert_eq!(overlay.handle_key(Key::Digit3), None);
        assert!(overlay.is_open(Drawer::Principles));
        assert!(!overlay.is_open(Drawer::Impact));
        assert!(overlay.is_open(Drawer::System));

        overlay.handle_key(Key::Digit1);
        assert!(!overlay.is_open(Drawer::Principles));

        overlay.handle_key(Key::C);
        assert!(overlay.shows_code());
    }

    #[test]
    fn test_overlay_escape_and_full_page() {
        let mut overlay = ShowcaseOverlay::new("lazr");
        assert_eq!(
            overlay.handle_key(Key::Escape),
            Some(ShowcaseEffect::Navigate(Route::Work))
        );
        assert_eq!(
            overlay.toolbar(ToolbarAction::OpenFullPage),
            Some(ShowcaseEffect::Navigate(Route::ShowcaseFull { id: "lazr".into() }))
        );
        assert_eq!(
            overlay.toolbar(ToolbarAction::ToggleTheme),
            Some(ShowcaseEffect::ToggleTheme)
        );
        assert_eq!(overlay.toolbar(ToolbarAction::Toggle(Drawer::Impact)), None);
        assert!(overlay.is_open(Drawer::Impact));
    }

    #[test]
    fn test_toolbar_names() {
        assert_eq!(
            ToolbarAction::parse("impact"),
            Some(ToolbarAction::Toggle(Drawer::Impact))
        );
        assert_eq!(ToolbarAction::parse("full"), Some(ToolbarAction::OpenFullPage));
        assert_eq!(ToolbarAction::parse("Impact"), None);
    }

    #[test]
    fn test_tab_names() {
        for tab in ShowcaseTab::ALL {
            assert_eq!(ShowcaseTab::parse(tab.as_str()), Some(tab));
        }
        assert_eq!(ShowcaseTab::parse("gallery"), None);
    }

    #[test]
    fn test_tabs_clamp() {
        assert_eq!(ShowcaseTab::Components.previous(), ShowcaseTab::Components);
        assert_eq!(ShowcaseTab::Components.next(), ShowcaseTab::Principles);
        assert_eq!(ShowcaseTab::System.next(), ShowcaseTab::System);
        assert_eq!(ShowcaseTab::System.previous(), ShowcaseTab::Impact);
    }

    #[test]
    fn test_page_arrows() {
        let store = MemoryStore::new();
        let mut page = ShowcasePage::new("lazr", ThemeMode::Dark, &store);
        for _ in 0..6 {
            page.handle_key(Key::ArrowRight);
        }
        assert_eq!(page.tab(), ShowcaseTab::System);
        page.handle_key(Key::ArrowLeft);
        assert_eq!(page.tab(), ShowcaseTab::Impact);
        assert_eq!(page.handle_key(Key::Escape), Some(page.back()));
    }

    #[test]
    fn test_playground_size_persists() {
        let mut store = MemoryStore::new();
        let mut page = ShowcasePage::new("lazr", ThemeMode::Dark, &store);
        assert_eq!(page.playground().size(), PlaygroundSize::Md);

        page.playground_mut().set_size(PlaygroundSize::Sm, &mut store);
        let reopened = ShowcasePage::new("lazr", ThemeMode::Dark, &store);
        assert_eq!(reopened.playground().size(), PlaygroundSize::Sm);
    }

    #[test]
    fn test_playground_theme_follows_site() {
        let store = MemoryStore::new();
        let mut page = ShowcasePage::new("lazr", ThemeMode::Light, &store);
        assert_eq!(page.playground().theme(), ThemeMode::Light);

        page.playground_mut().set_theme(ThemeMode::Dark);
        page.playground_mut().sync_theme(ThemeMode::Light);
        assert_eq!(page.playground().theme(), ThemeMode::Light);
    }
}
