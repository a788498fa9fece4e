//! Keyed enter/update/exit reconciliation.
//!
//! ## Purpose
//!
//! This module computes the three-way diff between the set of marks already
//! on the scene and the keys of an incoming dataset. Identity is defined
//! solely by key equality — not by position, index, or record contents.
//!
//! ## Design notes
//!
//! * **Plain set operations**: The diff is the symmetric difference of the
//!   previous and next key sets, bucketed into enter (new only), update
//!   (both), and exit (previous only).
//! * **Deterministic order**: Enter and update buckets preserve incoming
//!   data order; the exit bucket preserves previous scene order. `IndexSet`
//!   supplies the insertion-ordered set semantics.
//!
//! ## Invariants
//!
//! * Every next key lands in exactly one of enter/update.
//! * Every previous key lands in exactly one of update/exit.
//! * The three buckets are pairwise disjoint.
//!
//! ## Non-goals
//!
//! * This module does not mutate the scene (see `engine::frame` and the API
//!   layer).
//! * This module does not detect duplicate keys (see `engine::cleaner`).

// External dependencies
use indexmap::IndexSet;

// ============================================================================
// Keyed Diff
// ============================================================================

/// The three buckets of a keyed reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyedDiff {
    /// Keys present only in the incoming dataset, in data order.
    pub enter: Vec<String>,

    /// Keys present in both, in data order.
    pub update: Vec<String>,

    /// Keys present only on the scene, in scene order.
    pub exit: Vec<String>,
}

/// Diff the previous scene keys against the incoming dataset keys.
pub fn diff<'a, I>(previous: &IndexSet<String>, next: I) -> KeyedDiff
where
    I: IntoIterator<Item = &'a String>,
{
    let mut out = KeyedDiff::default();
    let mut seen: IndexSet<String> = IndexSet::new();

    for key in next {
        seen.insert(key.clone());
        if previous.contains(key) {
            out.update.push(key.clone());
        } else {
            out.enter.push(key.clone());
        }
    }

    for key in previous {
        if !seen.contains(key) {
            out.exit.push(key.clone());
        }
    }

    out
}
