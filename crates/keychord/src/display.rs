//! Display formatting for chords.

use crate::chord::{BindingSpec, Chord};
use std::fmt;

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<&str> = Vec::new();

        if self.ctrl {
            parts.push("ctrl");
        }
        if self.alt {
            parts.push("alt");
        }
        if self.super_key.unwrap_or(false) {
            parts.push("super");
        }
        if self.shift {
            parts.push("shift");
        }
        match self.key.as_str() {
            "" => {}
            "delete" => parts.push("del"),
            key => parts.push(key),
        }

        let joined = parts.join("+");
        if self.leader {
            if joined.is_empty() {
                write!(f, "<leader>")
            } else {
                write!(f, "<leader> {}", joined)
            }
        } else {
            write!(f, "{}", joined)
        }
    }
}

impl fmt::Display for BindingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.iter().map(|chord| chord.to_string()).collect();
        write!(f, "{}", labels.join(", "))
    }
}

/// Render a possibly-unbound chord for UI surfaces.
///
/// An absent binding renders as the empty string.
pub fn label(chord: Option<&Chord>) -> String {
    chord.map(|c| c.to_string()).unwrap_or_default()
}
