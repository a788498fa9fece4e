//! Categorical color assignment.
//!
//! ## Purpose
//!
//! This module assigns palette colors to categorical color keys. Keys are
//! assigned palette slots in first-seen order and keep their color for the
//! lifetime of the assignment, so a category's color is stable across
//! redraws.
//!
//! ## Design notes
//!
//! * **First-seen order**: Assignment order is the order keys are first
//!   requested, held in an insertion-ordered map for determinism.
//! * **Cycling**: When categories outnumber palette entries, colors repeat
//!   from the start of the palette.
//! * **Reset on reconfiguration**: Replacing the palette discards existing
//!   assignments.
//!
//! ## Invariants
//!
//! * The same key always yields the same color until the palette is replaced.
//! * `color_for` never fails for a non-empty palette.
//!
//! ## Non-goals
//!
//! * This module does not parse or validate color strings; palette entries
//!   pass through to the output verbatim.

// External dependencies
use indexmap::IndexMap;

// ============================================================================
// Default Palette
// ============================================================================

/// The ten-color categorical palette used when none is configured.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

// ============================================================================
// Category Scale
// ============================================================================

/// A categorical color scale with stable first-seen assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScale {
    palette: Vec<String>,
    assigned: IndexMap<String, usize>,
}

impl CategoryScale {
    /// Create a scale over the given palette.
    pub fn new(palette: Vec<String>) -> Self {
        Self {
            palette,
            assigned: IndexMap::new(),
        }
    }

    /// Create a scale over the default ten-color palette.
    pub fn category10() -> Self {
        Self::new(CATEGORY10.iter().map(|c| (*c).to_string()).collect())
    }

    /// The palette entries in order.
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Resolve the color for a categorical key, assigning a palette slot on
    /// first sight.
    pub fn color_for(&mut self, key: &str) -> String {
        let next = self.assigned.len();
        let slot = *self
            .assigned
            .entry(key.to_string())
            .or_insert_with(|| next % self.palette.len().max(1));

        self.palette
            .get(slot)
            .cloned()
            .unwrap_or_else(|| "#000000".to_string())
    }

    /// Discard all key assignments, keeping the palette.
    pub fn reset(&mut self) {
        self.assigned.clear();
    }
}

impl Default for CategoryScale {
    fn default() -> Self {
        Self::category10()
    }
}
