use serde::{Deserialize, Serialize};

/// Directional keys the graph scrolls on; everything else belongs to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationKey {
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
}

impl NavigationKey {
    #[must_use]
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::PageUp => Some(Self::PageUp),
            KeyCode::PageDown => Some(Self::PageDown),
            KeyCode::Char(_) | KeyCode::Enter | KeyCode::Escape | KeyCode::Tab => None,
        }
    }
}

/// Key as delivered by the host's event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Enter,
    Escape,
    Tab,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KeyModifiers {
    /// Fast-scroll modifier (typically Ctrl).
    pub fast: bool,
}

impl KeyModifiers {
    pub const NONE: Self = Self { fast: false };
    pub const FAST: Self = Self { fast: true };
}

/// Tuning for keyboard scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollBehavior {
    /// Cells moved per key press while the fast modifier is held.
    pub fast_multiplier: f64,
}

impl Default for ScrollBehavior {
    fn default() -> Self {
        Self {
            fast_multiplier: 5.0,
        }
    }
}

impl ScrollBehavior {
    /// Scroll delta in cells for `key`, `(columns, rows)` with rows growing
    /// upward in graph space.
    ///
    /// `page_rows` is the drawable height used by page keys.
    #[must_use]
    pub fn cell_delta(
        self,
        key: NavigationKey,
        modifiers: KeyModifiers,
        page_rows: f64,
    ) -> (f64, f64) {
        let step = if modifiers.fast {
            self.fast_multiplier
        } else {
            1.0
        };
        match key {
            NavigationKey::Left => (-step, 0.0),
            NavigationKey::Right => (step, 0.0),
            NavigationKey::Up => (0.0, step),
            NavigationKey::Down => (0.0, -step),
            NavigationKey::PageUp => (0.0, page_rows),
            NavigationKey::PageDown => (0.0, -page_rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyCode, KeyModifiers, NavigationKey, ScrollBehavior};

    #[test]
    fn only_directional_codes_map_to_navigation() {
        assert_eq!(
            NavigationKey::from_key_code(KeyCode::PageUp),
            Some(NavigationKey::PageUp)
        );
        assert_eq!(NavigationKey::from_key_code(KeyCode::Char('h')), None);
        assert_eq!(NavigationKey::from_key_code(KeyCode::Enter), None);
    }

    #[test]
    fn fast_modifier_multiplies_arrow_steps_only() {
        let behavior = ScrollBehavior::default();
        assert_eq!(
            behavior.cell_delta(NavigationKey::Left, KeyModifiers::FAST, 20.0),
            (-5.0, 0.0)
        );
        assert_eq!(
            behavior.cell_delta(NavigationKey::PageDown, KeyModifiers::FAST, 20.0),
            (0.0, -20.0)
        );
    }
}
