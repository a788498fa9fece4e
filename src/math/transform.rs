//! Axis value transforms.
//!
//! ## Purpose
//!
//! This module defines the per-axis value transform applied before
//! regression and statistics: the identity for linear axes, and the base-10
//! logarithm for logarithmic axes. The inverse transform maps fitted values
//! back into data space for plotting.
//!
//! ## Design notes
//!
//! * **Tagged dispatch**: A transform is a two-variant enum; apply/invert
//!   dispatch on the tag rather than swapping function objects.
//! * **Symmetry**: `invert(apply(v)) == v` for values in the transform's
//!   domain.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `Log10::apply` is only meaningful for positive inputs; zero inputs are
//!   excluded upstream by data cleaning.
//!
//! ## Non-goals
//!
//! * This module does not map values to pixels (see `math::scale`).
//! * This module does not filter invalid inputs (see `engine::cleaner`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Axis Transform
// ============================================================================

/// Value transform applied to one axis before fitting and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisTransform {
    /// No transform; values pass through unchanged.
    #[default]
    Identity,

    /// Base-10 logarithm, paired with `10^v` as the inverse.
    Log10,
}

impl AxisTransform {
    /// Select the transform for an axis from its log toggle.
    pub fn from_log_flag(log: bool) -> Self {
        if log {
            AxisTransform::Log10
        } else {
            AxisTransform::Identity
        }
    }

    /// Apply the forward transform to a data-space value.
    #[inline]
    pub fn apply<T: Float>(self, v: T) -> T {
        match self {
            AxisTransform::Identity => v,
            AxisTransform::Log10 => v.log10(),
        }
    }

    /// Map a transformed value back into data space.
    #[inline]
    pub fn invert<T: Float>(self, v: T) -> T {
        match self {
            AxisTransform::Identity => v,
            AxisTransform::Log10 => T::from(10).unwrap().powf(v),
        }
    }
}
