//! Crossterm event conversion.

use crate::chord::Chord;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl Chord {
    /// Convert a crossterm key event into a chord with canonical key names.
    ///
    /// `leader` is never set here; tracking the leader keypress belongs to
    /// the input layer feeding this crate.
    pub fn from_key_event(event: &KeyEvent) -> Chord {
        let modifiers = event.modifiers;
        let mut shift = modifiers.contains(KeyModifiers::SHIFT);

        let key = match event.code {
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => c.to_lowercase().to_string(),
            KeyCode::Esc => "escape".to_string(),
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::BackTab => {
                shift = true;
                "tab".to_string()
            }
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::Insert => "insert".to_string(),
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::Left => "left".to_string(),
            KeyCode::Right => "right".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "pageup".to_string(),
            KeyCode::PageDown => "pagedown".to_string(),
            KeyCode::F(n) => format!("f{}", n),
            code => format!("{:?}", code).to_lowercase(),
        };

        Chord {
            key,
            ctrl: modifiers.contains(KeyModifiers::CONTROL),
            alt: modifiers.contains(KeyModifiers::ALT)
                || modifiers.contains(KeyModifiers::META),
            shift,
            super_key: if modifiers.contains(KeyModifiers::SUPER) {
                Some(true)
            } else {
                None
            },
            leader: false,
        }
    }
}

impl From<&KeyEvent> for Chord {
    fn from(event: &KeyEvent) -> Self {
        Chord::from_key_event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_char_event() {
        let event = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        let chord = Chord::from_key_event(&event);

        assert_eq!(chord.key, "s");
        assert!(chord.ctrl);
        assert!(!chord.shift);
        assert_eq!(chord.super_key, None);
    }

    #[test]
    fn test_uppercase_char_folds() {
        let event = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);
        let chord = Chord::from_key_event(&event);

        assert_eq!(chord.key, "s");
        assert!(chord.shift);
    }

    #[test]
    fn test_event_matches_parsed_spec() {
        let event = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(parse("ctrl+s").matches(&Chord::from(&event)));
    }

    #[test]
    fn test_esc_event_matches_esc_alias() {
        let event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let chord = Chord::from_key_event(&event);

        assert_eq!(chord.key, "escape");
        assert!(parse("esc").matches(&chord));
    }

    #[test]
    fn test_backtab_forces_shift() {
        let event = KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE);
        let chord = Chord::from_key_event(&event);

        assert_eq!(chord.key, "tab");
        assert!(chord.shift);
        assert!(parse("shift+tab").matches(&chord));
    }

    #[test]
    fn test_meta_merges_into_alt() {
        let event = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::META);
        let chord = Chord::from_key_event(&event);

        assert!(chord.alt);
        assert!(parse("meta+x").matches(&chord));
    }

    #[test]
    fn test_super_modifier() {
        let event = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER);
        let chord = Chord::from_key_event(&event);

        assert_eq!(chord.super_key, Some(true));
        assert!(parse("super+k").matches(&chord));
    }

    #[test]
    fn test_function_key() {
        let event = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert!(parse("f5").matches(&Chord::from_key_event(&event)));
    }

    #[test]
    fn test_space() {
        let event = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(Chord::from_key_event(&event).key, "space");
    }

    #[test]
    fn test_delete_event() {
        let event = KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE);
        let chord = Chord::from_key_event(&event);

        assert!(parse("delete").matches(&chord));
        assert_eq!(chord.to_string(), "del");
    }
}
