//! Configuration records and accessor types for the chart.
//!
//! ## Purpose
//!
//! This module defines the configuration snapshot consumed by the render
//! pipeline (dimensions, margins, labels, log toggles, mark styling) and the
//! accessor functions through which the otherwise-opaque data records are
//! read.
//!
//! ## Design notes
//!
//! * **Snapshot semantics**: `ChartConfig` is a plain record; the pipeline
//!   reads it, never mutates it. Reconfiguration replaces fields through the
//!   API layer and takes effect on the next render/redraw pass.
//! * **Opaque data**: Data records are only observed through the accessors;
//!   the chart imposes no trait bounds on the record type beyond what the
//!   caller's closures require.
//! * **Generics**: Numeric values are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Accessors**: Pure functions mapping a record to an x value, a y value,
//!   a categorical color key, and a stable unique identity.
//! * **Margins**: The drawing surface is sized `width + margin.left +
//!   margin.right` by `height + margin.top + margin.bottom`; the plot area is
//!   translated by `(left, top)`.
//!
//! ## Invariants
//!
//! * The key accessor must be stable across redraws for a given record.
//! * Dimensions, margins, radius, and duration are finite (enforced by the
//!   engine validator, not here).
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (see `engine::validator`).
//! * This module does not hold derived state (scales, statistics, scene).

// External dependencies
use num_traits::Float;

// ============================================================================
// Accessor Types
// ============================================================================

/// Accessor extracting a numeric field from a data record.
pub type ValueAccessor<D, T> = Box<dyn Fn(&D) -> T>;

/// Accessor extracting a categorical key (color class or identity) from a
/// data record.
pub type KeyAccessor<D> = Box<dyn Fn(&D) -> String>;

/// The four accessors through which the chart observes its data.
pub struct Accessors<D, T> {
    /// Maps a record to its x value.
    pub x: ValueAccessor<D, T>,

    /// Maps a record to its y value.
    pub y: ValueAccessor<D, T>,

    /// Maps a record to its categorical color key.
    pub color: KeyAccessor<D>,

    /// Maps a record to its stable unique identity.
    pub key: KeyAccessor<D>,
}

// ============================================================================
// Margin
// ============================================================================

/// Margins around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin<T> {
    /// Space above the plot area.
    pub top: T,

    /// Space to the right of the plot area.
    pub right: T,

    /// Space below the plot area.
    pub bottom: T,

    /// Space to the left of the plot area.
    pub left: T,
}

impl<T: Float> Margin<T> {
    /// Construct a margin from its four sides.
    pub fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Conventional default margin leaving room for axis ticks and labels.
    pub fn conventional() -> Self {
        Self {
            top: T::from(20).unwrap(),
            right: T::from(20).unwrap(),
            bottom: T::from(30).unwrap(),
            left: T::from(40).unwrap(),
        }
    }
}

impl<T: Float> Default for Margin<T> {
    fn default() -> Self {
        Self::conventional()
    }
}

// ============================================================================
// Chart Configuration
// ============================================================================

/// Configuration snapshot consumed by the render pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig<T> {
    /// Plot area width in pixels (excluding margins).
    pub width: T,

    /// Plot area height in pixels (excluding margins).
    pub height: T,

    /// Margins around the plot area.
    pub margin: Margin<T>,

    /// x-axis label text.
    pub x_label: String,

    /// y-axis label text.
    pub y_label: String,

    /// Whether the x-axis uses a base-10 logarithmic scale.
    pub x_log: bool,

    /// Whether the y-axis uses a base-10 logarithmic scale.
    pub y_log: bool,

    /// Mark circle radius in pixels.
    pub radius: T,

    /// Categorical color palette, assigned to color keys in first-seen order.
    pub palette: Vec<String>,

    /// Duration of redraw transitions, in host time-units.
    pub duration: T,
}

impl<T: Float> ChartConfig<T> {
    /// Surface width including margins.
    pub fn outer_width(&self) -> T {
        self.width + self.margin.left + self.margin.right
    }

    /// Surface height including margins.
    pub fn outer_height(&self) -> T {
        self.height + self.margin.top + self.margin.bottom
    }
}
