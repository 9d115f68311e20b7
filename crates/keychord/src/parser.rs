//! Binding specification parser.

use crate::chord::{BindingSpec, Chord};
use std::fmt;

/// Specification string for an explicitly unbound action.
///
/// Matched exactly, before any case folding, so `"None"` is an ordinary
/// key name while `"none"` is the sentinel.
pub const NO_BINDING: &str = "none";

/// Parse a binding specification string.
///
/// Supported formats:
/// - `"none"` - explicitly unbound (empty specification)
/// - `"ctrl+s"` - modifier(s) plus key, joined with `+`
/// - `"alt+x"`, `"meta+x"`, `"option+x"` - all three set the alt modifier
/// - `"super+k"`, `"shift+tab"` - remaining modifiers
/// - `"<leader>g"` - leader-prefixed chord
/// - `"ctrl+s,ctrl+w"` - comma-separated alternatives for the same action
///
/// Parsing is total: unknown key names pass through verbatim and malformed
/// input degrades to chords that simply never match real input. Use
/// [`lint`] to surface suspect specifications.
pub fn parse(spec: &str) -> BindingSpec {
    if spec == NO_BINDING {
        return BindingSpec::new();
    }

    BindingSpec::from_alternatives(spec.split(',').map(parse_chord).collect())
}

/// Parse one comma-separated alternative.
///
/// `<leader>` is rewritten before case folding, so the marker itself is
/// case-sensitive.
fn parse_chord(combo: &str) -> Chord {
    let combo = combo.replace("<leader>", "leader+").to_lowercase();

    let mut chord = Chord::default();
    for part in combo.split('+') {
        match part {
            "ctrl" => chord.ctrl = true,
            "alt" | "meta" | "option" => chord.alt = true,
            "super" => chord.super_key = Some(true),
            "shift" => chord.shift = true,
            "leader" => chord.leader = true,
            "esc" => chord.key = "escape".to_string(),
            // Last key token wins, so "ctrl+s+" ends up with an empty key.
            other => chord.key = other.to_string(),
        }
    }

    chord
}

impl From<&str> for BindingSpec {
    fn from(spec: &str) -> Self {
        parse(spec)
    }
}

/// A suspect construction in a binding specification string.
///
/// Advisory only; [`parse`] accepts these inputs unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecWarning {
    /// An empty alternative, produced by a leading, trailing, or doubled
    /// comma.
    EmptyAlternative {
        /// Position of the alternative within the specification
        index: usize,
    },
    /// An alternative that never names a key, such as `"ctrl+"`.
    MissingKey {
        /// Position of the alternative within the specification
        index: usize,
        /// The alternative as written
        combo: String,
    },
}

impl fmt::Display for SpecWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAlternative { index } => {
                write!(f, "alternative {} is empty", index)
            }
            Self::MissingKey { index, combo } => {
                write!(f, "alternative {} ('{}') has no key", index, combo)
            }
        }
    }
}

/// Check a binding specification string for suspect constructions.
pub fn lint(spec: &str) -> Vec<SpecWarning> {
    if spec == NO_BINDING {
        return Vec::new();
    }

    let mut warnings = Vec::new();
    for (index, combo) in spec.split(',').enumerate() {
        if combo.is_empty() {
            warnings.push(SpecWarning::EmptyAlternative { index });
            continue;
        }
        if parse_chord(combo).key.is_empty() {
            warnings.push(SpecWarning::MissingKey {
                index,
                combo: combo.to_string(),
            });
        }
    }
    warnings
}
