//! # keychord
//!
//! Keybinding specification parsing, matching, and display.
//!
//! ## Features
//!
//! - `"ctrl+s"`-style specification strings with comma-separated
//!   alternatives
//! - Leader-key chords (`"<leader>g"`)
//! - The `"none"` sentinel for explicitly unbound actions
//! - Action keymaps with merging and conflict detection
//! - Optional crossterm event conversion (feature `crossterm`, on by
//!   default)
//!
//! Parsing is total and matching is a pure predicate; reading input events
//! and dispatching actions stay with the caller.

mod chord;
mod conflict;
mod display;
#[cfg(feature = "crossterm")]
mod event;
mod keymap;
mod matcher;
mod parser;

pub use chord::{BindingSpec, Chord};
pub use conflict::{Conflict, ConflictReport, KeymapError};
pub use display::label;
pub use keymap::Keymap;
pub use matcher::matches;
pub use parser::{lint, parse, SpecWarning, NO_BINDING};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_to_dispatch_flow() {
        let mut keymap = Keymap::from_entries([
            ("save", "ctrl+s"),
            ("search", "ctrl+f,<leader>f"),
            ("quit", "ctrl+q"),
        ]);

        let user = Keymap::from_entries([("quit", "none"), ("save", "ctrl+w")]);
        keymap.merge(user);
        let keymap = keymap.verified().unwrap();

        assert_eq!(keymap.lookup(&Chord::ctrl("w")), Some("save"));
        assert_eq!(keymap.lookup(&Chord::leader("f")), Some("search"));
        assert_eq!(keymap.lookup(&Chord::ctrl("q")), None);
        assert_eq!(keymap.label("search"), "ctrl+f, <leader> f");
        assert_eq!(keymap.label("quit"), "");
    }

    #[test]
    fn test_free_function_surface() {
        let spec = parse("alt+esc");
        let chord = spec.alternatives.first();

        assert!(matches(chord, &Chord::alt("escape")));
        assert!(!matches(None, &Chord::alt("escape")));
        assert_eq!(label(chord), "alt+escape");
        assert_eq!(label(None), "");
    }
}
