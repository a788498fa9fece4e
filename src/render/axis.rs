//! Axis tick and gridline generation.
//!
//! ## Purpose
//!
//! This module turns a scale into a renderable axis: a sequence of ticks
//! (domain value plus pixel position) and a tick size. Negative tick sizes
//! extend ticks across the plot as gridlines, spanning the opposite
//! dimension.
//!
//! ## Design notes
//!
//! * **Bound to a scale**: Tick values come from the scale's tick generator;
//!   positions come from the scale's mapping. Regenerating an axis from a
//!   rescaled domain is the whole of an axis update.
//! * **Orientation**: Bottom axes render below the plot, left axes to the
//!   left; the orientation only affects serialization.
//!
//! ## Invariants
//!
//! * Tick positions lie within the scale's pixel range.
//! * The axis records the scale's domain so redraws can describe the domain
//!   change they transition through.
//!
//! ## Non-goals
//!
//! * This module does not draw (see `render::svg`).
//! * This module does not pick domains (see `engine::frame`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scale::Scale;

/// Default number of ticks requested from a scale.
pub const DEFAULT_TICK_COUNT: usize = 10;

// ============================================================================
// Axis Types
// ============================================================================

/// Which side of the plot an axis renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Horizontal axis below the plot.
    Bottom,

    /// Vertical axis to the left of the plot.
    Left,
}

/// One axis tick: a domain value and its pixel position along the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick<T> {
    /// Domain value the tick marks.
    pub value: T,

    /// Pixel position along the axis.
    pub position: T,
}

/// A renderable axis generated from a scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis<T> {
    /// Side of the plot the axis renders on.
    pub orientation: Orientation,

    /// Domain of the scale the axis was generated from.
    pub domain: (T, T),

    /// Ticks in ascending domain order.
    pub ticks: Vec<Tick<T>>,

    /// Tick length in pixels; negative values span the plot as gridlines.
    pub tick_size: T,
}

impl<T: Float> Axis<T> {
    /// Generate an axis from a scale.
    pub fn generate(orientation: Orientation, scale: &Scale<T>, tick_size: T) -> Self {
        let ticks = scale
            .ticks(DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|value| Tick {
                value,
                position: scale.map(value),
            })
            .collect();

        Self {
            orientation,
            domain: scale.domain(),
            ticks,
            tick_size,
        }
    }
}
