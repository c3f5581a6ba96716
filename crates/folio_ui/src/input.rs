//! Keyboard input for the showcase shortcuts.

/// Keys the site reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key.
    Escape,
    /// Digit 1 (principles drawer).
    Digit1,
    /// Digit 2 (impact drawer).
    Digit2,
    /// Digit 3 (system drawer).
    Digit3,
    /// Lowercase `c` (code toggle).
    C,
    /// Arrow left (previous tab).
    ArrowLeft,
    /// Arrow right (next tab).
    ArrowRight,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value. Case-sensitive: `"C"` is not `c`.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        Some(match key {
            "Escape" => Self::Escape,
            "1" => Self::Digit1,
            "2" => Self::Digit2,
            "3" => Self::Digit3,
            "c" => Self::C,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_keys() {
        assert_eq!(Key::from_dom_key("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_dom_key("2"), Some(Key::Digit2));
        assert_eq!(Key::from_dom_key("c"), Some(Key::C));
        assert_eq!(Key::from_dom_key("C"), None);
        assert_eq!(Key::from_dom_key("Enter"), None);
    }
}
