//! Domain-to-range scales.
//!
//! ## Purpose
//!
//! This module maps data-space domains onto pixel ranges. A scale is a
//! tagged variant — linear or base-10 logarithmic — with mapping, inversion,
//! and tick generation dispatched on the tag.
//!
//! ## Design notes
//!
//! * **Tagged variant**: The scale kind is an enum discriminant, not a
//!   swapped-out object; toggling an axis between linear and logarithmic
//!   changes the tag and nothing else.
//! * **Degenerate domains**: A zero-extent domain (all values identical) maps
//!   every value to the midpoint of the range instead of dividing by zero;
//!   `invert` returns the single domain value.
//! * **Inverted ranges**: Ranges may run high-to-low (the y-axis maps its
//!   domain minimum to the bottom of the plot).
//!
//! ## Key concepts
//!
//! * **Domain**: The input value interval, in data space.
//! * **Range**: The output interval, in pixels.
//! * **Ticks**: Reference values within the domain — uniform steps for
//!   linear scales, powers of ten for logarithmic scales.
//!
//! ## Invariants
//!
//! * `map(domain.0) == range.0` and `map(domain.1) == range.1` for
//!   non-degenerate domains.
//! * Tick values always lie within the domain (inclusive).
//!
//! ## Non-goals
//!
//! * This module does not choose domains (see `engine::frame`).
//! * This module does not render axes (see `render::axis`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::transform::AxisTransform;

// ============================================================================
// Extent
// ============================================================================

/// Compute the `(min, max)` extent of a sequence of values.
///
/// Returns `None` for an empty sequence. NaN values are assumed to have been
/// filtered upstream.
pub fn extent<T: Float>(values: impl IntoIterator<Item = T>) -> Option<(T, T)> {
    let mut iter = values.into_iter();
    let first = iter.next()?;
    let mut lo = first;
    let mut hi = first;
    for v in iter {
        if v < lo {
            lo = v;
        }
        if v > hi {
            hi = v;
        }
    }
    Some((lo, hi))
}

// ============================================================================
// Scale
// ============================================================================

/// A scale mapping a data-space domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale<T> {
    /// Linear interpolation between domain and range.
    Linear {
        /// Input value interval.
        domain: (T, T),
        /// Output pixel interval.
        range: (T, T),
    },

    /// Base-10 logarithmic interpolation between domain and range.
    Log10 {
        /// Input value interval.
        domain: (T, T),
        /// Output pixel interval.
        range: (T, T),
    },
}

impl<T: Float> Scale<T> {
    /// Construct a scale of the given kind from a log toggle.
    pub fn from_log_flag(log: bool, domain: (T, T), range: (T, T)) -> Self {
        if log {
            Scale::Log10 { domain, range }
        } else {
            Scale::Linear { domain, range }
        }
    }

    /// The scale's input interval.
    pub fn domain(&self) -> (T, T) {
        match *self {
            Scale::Linear { domain, .. } | Scale::Log10 { domain, .. } => domain,
        }
    }

    /// The scale's output interval.
    pub fn range(&self) -> (T, T) {
        match *self {
            Scale::Linear { range, .. } | Scale::Log10 { range, .. } => range,
        }
    }

    /// The transform underlying this scale's interpolation.
    fn transform(&self) -> AxisTransform {
        match self {
            Scale::Linear { .. } => AxisTransform::Identity,
            Scale::Log10 { .. } => AxisTransform::Log10,
        }
    }

    /// Map a data-space value to a pixel position.
    pub fn map(&self, value: T) -> T {
        let (d0, d1) = self.domain();
        let (r0, r1) = self.range();
        let t = self.transform();

        let lo = t.apply(d0);
        let hi = t.apply(d1);
        let span = hi - lo;

        if span.abs() <= T::epsilon() {
            // Degenerate domain: every value maps to the range midpoint.
            return (r0 + r1) / T::from(2).unwrap();
        }

        let frac = (t.apply(value) - lo) / span;
        r0 + frac * (r1 - r0)
    }

    /// Map a pixel position back to a data-space value.
    pub fn invert(&self, px: T) -> T {
        let (d0, d1) = self.domain();
        let (r0, r1) = self.range();
        let t = self.transform();

        let span = r1 - r0;
        if span.abs() <= T::epsilon() {
            return d0;
        }

        let lo = t.apply(d0);
        let hi = t.apply(d1);
        let frac = (px - r0) / span;
        t.invert(lo + frac * (hi - lo))
    }

    /// Generate tick values within the domain.
    ///
    /// Linear scales produce `count` uniform steps. Logarithmic scales
    /// produce the powers of ten inside the domain, falling back to the
    /// domain endpoints when the domain spans less than one decade.
    pub fn ticks(&self, count: usize) -> Vec<T> {
        let (d0, d1) = self.domain();

        match self {
            Scale::Linear { .. } => {
                let n = count.max(2);
                let span = d1 - d0;
                let mut out = Vec::with_capacity(n);
                for i in 0..n {
                    let frac = T::from(i).unwrap() / T::from(n - 1).unwrap();
                    out.push(d0 + span * frac);
                }
                out
            }
            Scale::Log10 { .. } => {
                let lo = d0.log10().ceil();
                let hi = d1.log10().floor();
                let ten = T::from(10).unwrap();

                if hi < lo {
                    return [d0, d1].into_iter().collect();
                }

                let mut out = Vec::new();
                let mut exp = lo;
                while exp <= hi {
                    out.push(ten.powf(exp));
                    exp = exp + T::one();
                }
                out
            }
        }
    }
}
