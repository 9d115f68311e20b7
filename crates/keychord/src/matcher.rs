//! Chord matching.

use crate::chord::{BindingSpec, Chord};

impl Chord {
    /// Canonical form for comparison: absent `super` becomes `false`.
    pub fn normalized(&self) -> Chord {
        let mut chord = self.clone();
        chord.super_key = Some(chord.super_key.unwrap_or(false));
        chord
    }

    /// Check whether this chord and the candidate describe the same key
    /// combination. Comparison happens over the normalized forms, so a
    /// chord that omits `super` matches one that sets it to `false`.
    pub fn matches(&self, candidate: &Chord) -> bool {
        self.normalized() == candidate.normalized()
    }
}

/// Check a possibly-unbound chord against a candidate.
///
/// An absent binding matches nothing.
pub fn matches(bound: Option<&Chord>, candidate: &Chord) -> bool {
    match bound {
        Some(chord) => chord.matches(candidate),
        None => false,
    }
}

impl BindingSpec {
    /// Check whether any alternative matches the candidate.
    ///
    /// The empty specification (an unbound action) matches nothing.
    pub fn matches(&self, candidate: &Chord) -> bool {
        self.iter().any(|chord| chord.matches(candidate))
    }
}
