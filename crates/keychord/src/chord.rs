//! Chord and binding specification types.

use serde::{Deserialize, Serialize};

/// A single key combination (key + modifiers).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Chord {
    /// Canonical lowercase key name (`"a"`, `"escape"`, `"f1"`).
    ///
    /// Empty means "modifiers only", which only malformed input produces.
    pub key: String,
    /// Ctrl modifier
    pub ctrl: bool,
    /// Alt modifier (also written `meta` or `option`)
    pub alt: bool,
    /// Shift modifier
    pub shift: bool,
    /// Super modifier. Stored chords from older configurations may omit the
    /// field, so absence must compare equal to `false`; use [`Chord::matches`]
    /// rather than `==` when absence may be in play.
    #[serde(rename = "super", default, skip_serializing_if = "Option::is_none")]
    pub super_key: Option<bool>,
    /// Whether the chord must be preceded by the leader key
    pub leader: bool,
}

impl Chord {
    /// Create a chord with no modifiers. Key names fold to lowercase.
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: key.into().to_lowercase(),
            ..Self::default()
        }
    }

    /// Create a Ctrl+key chord.
    pub fn ctrl(key: impl Into<String>) -> Self {
        Self {
            ctrl: true,
            ..Self::key(key)
        }
    }

    /// Create an Alt+key chord.
    pub fn alt(key: impl Into<String>) -> Self {
        Self {
            alt: true,
            ..Self::key(key)
        }
    }

    /// Create a Shift+key chord.
    pub fn shift(key: impl Into<String>) -> Self {
        Self {
            shift: true,
            ..Self::key(key)
        }
    }

    /// Create a leader-prefixed chord.
    pub fn leader(key: impl Into<String>) -> Self {
        Self {
            leader: true,
            ..Self::key(key)
        }
    }

    /// Add the Ctrl modifier.
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Add the Alt modifier.
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Add the Shift modifier.
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Add the Super modifier.
    pub fn with_super(mut self) -> Self {
        self.super_key = Some(true);
        self
    }

    /// Mark the chord as leader-prefixed.
    pub fn with_leader(mut self) -> Self {
        self.leader = true;
        self
    }
}

/// The parse result of one binding specification string: zero or more
/// chords, each an independent alternative trigger for the same action.
///
/// The `"none"` specification parses to the empty set, meaning the action
/// is explicitly unbound.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BindingSpec {
    /// The alternative chords, in specification order
    pub alternatives: Vec<Chord>,
}

impl BindingSpec {
    /// Create an empty specification (no binding).
    pub fn new() -> Self {
        Self {
            alternatives: Vec::new(),
        }
    }

    /// Create a specification with a single chord.
    pub fn single(chord: Chord) -> Self {
        Self {
            alternatives: vec![chord],
        }
    }

    /// Create a specification from multiple alternative chords.
    pub fn from_alternatives(alternatives: Vec<Chord>) -> Self {
        Self { alternatives }
    }

    /// Add an alternative chord.
    pub fn push(&mut self, chord: Chord) {
        self.alternatives.push(chord);
    }

    /// Check if this specification binds nothing.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Number of alternative chords.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Iterate over the alternative chords.
    pub fn iter(&self) -> impl Iterator<Item = &Chord> {
        self.alternatives.iter()
    }
}

impl From<Chord> for BindingSpec {
    fn from(chord: Chord) -> Self {
        Self::single(chord)
    }
}

impl From<Vec<Chord>> for BindingSpec {
    fn from(alternatives: Vec<Chord>) -> Self {
        Self { alternatives }
    }
}
