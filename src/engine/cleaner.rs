//! Clean-dataset filtering.
//!
//! ## Purpose
//!
//! This module produces the cleaned dataset a render/redraw pass operates
//! on: accessor values are extracted exactly once per record, records with
//! non-finite x or y values are dropped, and records whose value is zero on
//! a logarithmic axis are dropped (the logarithm of zero is undefined).
//!
//! ## Design notes
//!
//! * **Computed once per pass**: Domain-fitting, statistics, and mark
//!   drawing all consume the same `Vec<CleanPoint>`; the filter can never
//!   disagree with itself within a pass.
//! * **Accessor hygiene**: Accessors are called once per record per pass;
//!   the cleaned point carries the extracted values.
//! * **Key uniqueness**: Duplicate keys among cleaned records are rejected,
//!   since keyed reconciliation is undefined without unique identities.
//!
//! ## Key concepts
//!
//! * **Finite filter**: NaN and infinite accessor outputs mark a record
//!   invalid (the malformed-accessor case folds into this rule).
//! * **Log-zero filter**: `x == 0` is dropped only when the x-axis is
//!   logarithmic, symmetrically for y.
//!
//! ## Invariants
//!
//! * Cleaned points preserve the input data order.
//! * Every cleaned point has finite x and y, and non-zero values on any
//!   logarithmic axis.
//! * Keys are unique within the cleaned set.
//!
//! ## Non-goals
//!
//! * This module does not enforce a minimum point count (see
//!   `engine::frame`).
//! * This module does not transform values (see `math::transform`).

// External dependencies
use indexmap::IndexSet;
use num_traits::Float;

// Internal dependencies
use crate::primitives::config::Accessors;
use crate::primitives::errors::ChartError;

// ============================================================================
// Clean Point
// ============================================================================

/// One record of the cleaned dataset, with accessor values extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanPoint<T> {
    /// Stable unique identity of the record.
    pub key: String,

    /// Categorical color key of the record.
    pub color_key: String,

    /// Untransformed x value.
    pub x: T,

    /// Untransformed y value.
    pub y: T,
}

// ============================================================================
// Cleaning
// ============================================================================

/// Produce the cleaned dataset for one render/redraw pass.
pub fn clean<D, T: Float>(
    data: &[D],
    accessors: &Accessors<D, T>,
    x_log: bool,
    y_log: bool,
) -> Result<Vec<CleanPoint<T>>, ChartError> {
    let mut out = Vec::with_capacity(data.len());
    let mut keys: IndexSet<String> = IndexSet::with_capacity(data.len());

    for record in data {
        let x = (accessors.x)(record);
        let y = (accessors.y)(record);

        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        if (x_log && x == T::zero()) || (y_log && y == T::zero()) {
            continue;
        }

        let key = (accessors.key)(record);
        if !keys.insert(key.clone()) {
            return Err(ChartError::DuplicateKey { key });
        }

        out.push(CleanPoint {
            key,
            color_key: (accessors.color)(record),
            x,
            y,
        });
    }

    Ok(out)
}
