//! Action keymaps.

use crate::chord::{BindingSpec, Chord};
use crate::conflict::{Conflict, ConflictReport, KeymapError};
use crate::parser::{lint, parse};
use tracing::{debug, warn};

/// A keymap binding actions to chord specifications.
///
/// Entries keep insertion order, so [`Keymap::lookup`] is deterministic
/// when two actions claim the same chord.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    entries: Vec<(String, BindingSpec)>,
}

impl Keymap {
    /// Create a new empty keymap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a keymap from `(action, specification)` pairs.
    ///
    /// Suspect specification strings are logged and bound as written;
    /// ingestion never fails.
    pub fn from_entries<I, A, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (A, S)>,
        A: Into<String>,
        S: AsRef<str>,
    {
        let mut keymap = Self::new();
        for (action, raw) in entries {
            let action = action.into();
            let raw = raw.as_ref();

            for warning in lint(raw) {
                warn!("suspect keybinding '{}' for action '{}': {}", raw, action, warning);
            }

            let spec = parse(raw);
            debug!(
                "bound action '{}' to {} alternative(s) from '{}'",
                action,
                spec.len(),
                raw
            );
            keymap.bind(action, spec);
        }
        keymap
    }

    /// Bind an action, replacing any existing binding for it.
    ///
    /// Binding the `"none"` specification leaves the action explicitly
    /// unbound, which is how an override removes a default binding.
    pub fn bind(&mut self, action: impl Into<String>, spec: impl Into<BindingSpec>) {
        let action = action.into();
        let spec = spec.into();

        match self.entries.iter_mut().find(|(a, _)| *a == action) {
            Some((_, existing)) => *existing = spec,
            None => self.entries.push((action, spec)),
        }
    }

    /// Get the specification bound to an action.
    pub fn spec(&self, action: &str) -> Option<&BindingSpec> {
        self.entries
            .iter()
            .find(|(a, _)| a == action)
            .map(|(_, spec)| spec)
    }

    /// Check whether an action has at least one chord bound.
    pub fn is_bound(&self, action: &str) -> bool {
        self.spec(action).is_some_and(|spec| !spec.is_empty())
    }

    /// Render an action's binding for UI surfaces.
    ///
    /// Unknown and explicitly unbound actions render as the empty string.
    pub fn label(&self, action: &str) -> String {
        self.spec(action).map(|spec| spec.to_string()).unwrap_or_default()
    }

    /// Find the first action whose specification matches the candidate
    /// chord, in insertion order.
    pub fn lookup(&self, candidate: &Chord) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, spec)| spec.matches(candidate))
            .map(|(action, _)| action.as_str())
    }

    /// Merge another keymap into this one (other takes precedence).
    pub fn merge(&mut self, other: Keymap) {
        for (action, spec) in other.entries {
            self.bind(action, spec);
        }
    }

    /// Iterate over `(action, specification)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BindingSpec)> {
        self.entries.iter().map(|(action, spec)| (action.as_str(), spec))
    }

    /// Number of actions in the keymap, including explicitly unbound ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the keymap has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find chords claimed by more than one action.
    ///
    /// Grouping happens over normalized chords, so an absent `super`
    /// collides with an explicit `false`.
    pub fn conflicts(&self) -> ConflictReport {
        let mut groups: Vec<(Chord, Vec<String>)> = Vec::new();
        for (action, spec) in &self.entries {
            for chord in spec.iter() {
                let normalized = chord.normalized();
                match groups.iter_mut().find(|(c, _)| *c == normalized) {
                    Some((_, actions)) => {
                        if actions.iter().all(|a| a != action) {
                            actions.push(action.clone());
                        }
                    }
                    None => groups.push((normalized, vec![action.clone()])),
                }
            }
        }

        let mut report = ConflictReport::new();
        for (chord, actions) in groups {
            if actions.len() > 1 {
                report.add(Conflict { chord, actions });
            }
        }
        report
    }

    /// Reject the keymap if any chord is claimed by more than one action.
    pub fn verified(self) -> Result<Self, KeymapError> {
        let report = self.conflicts();
        if report.has_conflicts() {
            return Err(KeymapError::Conflicts(report));
        }
        Ok(self)
    }
}
