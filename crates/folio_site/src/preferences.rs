//! Persisted user preferences.
//!
//! Two string keys survive a reload: the site theme and the playground size.
//! The browser front end backs them with `localStorage`; tests and the native
//! tools use [`MemoryStore`].

use std::collections::HashMap;

use folio_shared::constants::{SHOWCASE_SIZE_STORAGE_KEY, THEME_STORAGE_KEY};
use folio_ui::ThemeMode;

use crate::error::SiteResult;

/// String key-value storage.
pub trait PreferenceStore {
    /// Reads a key. `Ok(None)` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SiteError::Storage`] if the backend refuses the read.
    fn get(&self, key: &str) -> SiteResult<Option<String>>;

    /// Writes a key.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SiteError::Storage`] if the backend refuses the write.
    fn set(&mut self, key: &str, value: &str) -> SiteResult<()>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> SiteResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> SiteResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Preview size of the showcase playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaygroundSize {
    /// Small.
    Sm,
    /// Medium.
    #[default]
    Md,
    /// Large.
    Lg,
}

impl PlaygroundSize {
    /// Every size, smallest first.
    pub const ALL: [Self; 3] = [Self::Sm, Self::Md, Self::Lg];

    /// Storage value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Parses a storage value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Reads the site theme. Missing, empty or unreadable means dark.
pub fn load_theme(store: &impl PreferenceStore) -> ThemeMode {
    match store.get(THEME_STORAGE_KEY) {
        Ok(Some(value)) if !value.is_empty() => ThemeMode::from_stored(&value),
        Ok(_) => ThemeMode::default(),
        Err(e) => {
            tracing::warn!(error = %e, "theme preference unreadable, using default");
            ThemeMode::default()
        }
    }
}

/// Writes the site theme. Failures are logged and dropped.
pub fn save_theme(store: &mut impl PreferenceStore, mode: ThemeMode) {
    if let Err(e) = store.set(THEME_STORAGE_KEY, mode.as_str()) {
        tracing::warn!(error = %e, "theme preference not saved");
    }
}

/// Reads the playground size. `None` if missing, unknown or unreadable.
pub fn load_playground_size(store: &impl PreferenceStore) -> Option<PlaygroundSize> {
    match store.get(SHOWCASE_SIZE_STORAGE_KEY) {
        Ok(value) => value.as_deref().and_then(PlaygroundSize::parse),
        Err(e) => {
            tracing::warn!(error = %e, "showcase size unreadable");
            None
        }
    }
}

/// Writes the playground size. Failures are logged and dropped.
pub fn save_playground_size(store: &mut impl PreferenceStore, size: PlaygroundSize) {
    if let Err(e) = store.set(SHOWCASE_SIZE_STORAGE_KEY, size.as_str()) {
        tracing::warn!(error = %e, "showcase size not saved");
    }
}
