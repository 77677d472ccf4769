//! Keyboard navigation: crossterm key events mapped to pagination intents.
//!
//! Only key presses (and repeats) count; releases are ignored so that
//! terminals reporting both edges do not navigate twice. Keys combined with
//! Ctrl or Alt are left to the host's own bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A navigation intent produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationKey {
    /// Go back one page (`Left`, `PageUp`).
    Previous,
    /// Go forward one page (`Right`, `PageDown`).
    Next,
    /// Jump to the first page (`Home`).
    First,
    /// Jump to the last page (`End`).
    Last,
}

impl NavigationKey {
    /// Map a crossterm key event to a navigation intent.
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        if event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        match event.code {
            KeyCode::Left | KeyCode::PageUp => Some(Self::Previous),
            KeyCode::Right | KeyCode::PageDown => Some(Self::Next),
            KeyCode::Home => Some(Self::First),
            KeyCode::End => Some(Self::Last),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrow_and_page_keys() {
        assert_eq!(NavigationKey::from_key_event(&press(KeyCode::Left)), Some(NavigationKey::Previous));
        assert_eq!(NavigationKey::from_key_event(&press(KeyCode::PageUp)), Some(NavigationKey::Previous));
        assert_eq!(NavigationKey::from_key_event(&press(KeyCode::Right)), Some(NavigationKey::Next));
        assert_eq!(NavigationKey::from_key_event(&press(KeyCode::PageDown)), Some(NavigationKey::Next));
        assert_eq!(NavigationKey::from_key_event(&press(KeyCode::Home)), Some(NavigationKey::First));
        assert_eq!(NavigationKey::from_key_event(&press(KeyCode::End)), Some(NavigationKey::Last));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(NavigationKey::from_key_event(&press(KeyCode::Char('a'))), None);
        assert_eq!(NavigationKey::from_key_event(&press(KeyCode::Enter)), None);
    }

    #[test]
    fn release_is_ignored() {
        let ev = KeyEvent::new_with_kind(KeyCode::Right, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(NavigationKey::from_key_event(&ev), None);
    }

    #[test]
    fn shift_is_allowed_ctrl_is_not() {
        let shifted = KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT);
        assert_eq!(NavigationKey::from_key_event(&shifted), Some(NavigationKey::Next));

        let ctrl = KeyEvent::new(KeyCode::Right, KeyModifiers::CONTROL);
        assert_eq!(NavigationKey::from_key_event(&ctrl), None);
    }
}
