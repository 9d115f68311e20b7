//! Conflict detection for keymaps.

use crate::chord::Chord;
use std::fmt;
use thiserror::Error;

/// A chord claimed by more than one action.
#[derive(Debug, Clone)]
pub struct Conflict {
    /// The contested chord, in normalized form
    pub chord: Chord,
    /// The actions bound to it, in keymap order
    pub actions: Vec<String>,
}

/// Report of all conflicts found in a keymap.
#[derive(Debug, Default)]
pub struct ConflictReport {
    /// All detected conflicts
    pub conflicts: Vec<Conflict>,
}

impl ConflictReport {
    /// Create an empty conflict report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a conflict to the report.
    pub fn add(&mut self, conflict: Conflict) {
        self.conflicts.push(conflict);
    }

    /// Check if there are any conflicts.
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Iterate over the conflicts.
    pub fn iter(&self) -> impl Iterator<Item = &Conflict> {
        self.conflicts.iter()
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conflicts.is_empty() {
            return write!(f, "no conflicts detected");
        }

        for conflict in &self.conflicts {
            writeln!(f, "'{}' is bound to multiple actions:", conflict.chord)?;
            for action in &conflict.actions {
                writeln!(f, "  - {}", action)?;
            }
        }

        Ok(())
    }
}

/// Error verifying a keymap.
#[derive(Debug, Error)]
pub enum KeymapError {
    #[error("keybinding conflicts detected:\n{0}")]
    Conflicts(ConflictReport),
}
