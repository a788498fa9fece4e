//! Regression Logic
//!
//! ## Purpose
//!
//! This module provides the least-squares fit underlying the regression
//! overlay:
//! - An ordinary least-squares (OLS) solver over transformed pairs.
//! - Prediction from the fitted line.
//! - The two-point construction mapping the fitted line back into data space
//!   at the x-domain endpoints.
//!
//! ## Design notes
//!
//! * **Transformed space**: The fit always runs over already-transformed
//!   pairs (`log10` applied per axis toggle); the line is linear there and
//!   only its endpoints are mapped back through the inverse transform.
//! * **Zero variance**: A degenerate x sequence yields slope 0 and intercept
//!   equal to the y mean rather than a division by zero.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `fit_ols` over n >= 1 points always produces finite coefficients when
//!   its inputs are finite.
//! * The rendered line is exactly the segment between the endpoint images;
//!   it is never re-sampled at interior points.
//!
//! ## Non-goals
//!
//! * This module does not compute goodness-of-fit statistics (see
//!   `evaluation::statistics`).
//! * This module does not clean or transform input data (see
//!   `engine::cleaner` and `math::transform`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::transform::AxisTransform;

// ============================================================================
// LinearFit
// ============================================================================

/// Linear regression fit result (slope and intercept).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Slope (beta_1)
    pub slope: T,

    /// Intercept (beta_0)
    pub intercept: T,
}

impl<T: Float> LinearFit<T> {
    /// Create a zero-initialized fit.
    pub fn zero() -> Self {
        Self {
            slope: T::zero(),
            intercept: T::zero(),
        }
    }

    /// Predict a y-value for a given x using the model.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Fit Ordinary Least Squares (OLS) regression over paired sequences.
    pub fn fit_ols(x: &[T], y: &[T]) -> Self {
        let n = x.len();
        if n == 0 {
            return Self::zero();
        }

        let n_t = T::from(n).unwrap_or(T::one());

        let mut sum_x = T::zero();
        let mut sum_y = T::zero();

        for i in 0..n {
            sum_x = sum_x + x[i];
            sum_y = sum_y + y[i];
        }

        let x_mean = sum_x / n_t;
        let y_mean = sum_y / n_t;

        let mut variance = T::zero();
        let mut covariance = T::zero();

        for i in 0..n {
            let dx = x[i] - x_mean;
            let dy = y[i] - y_mean;
            variance = variance + dx * dx;
            covariance = covariance + dx * dy;
        }

        let tol = T::from(1e-12).unwrap();
        if variance <= tol {
            return Self {
                slope: T::zero(),
                intercept: y_mean,
            };
        }

        let slope = covariance / variance;
        let intercept = y_mean - slope * x_mean;

        Self { slope, intercept }
    }
}

// ============================================================================
// Regression Line Mapping
// ============================================================================

/// Evaluate the fitted line at a data-space x value.
///
/// The x value is pushed through the forward x transform, the line is
/// evaluated in transformed space, and the result is pulled back through the
/// inverse y transform.
#[inline]
pub fn evaluate_at<T: Float>(
    fit: &LinearFit<T>,
    x: T,
    x_transform: AxisTransform,
    y_transform: AxisTransform,
) -> T {
    y_transform.invert(fit.predict(x_transform.apply(x)))
}

/// Compute the data-space endpoints of the regression line over an x-domain.
///
/// Returns `((x_lo, y_lo), (x_hi, y_hi))` where the y values are the images
/// of the domain bounds under the fitted line. Under a log transform of one
/// axis only, the segment between these endpoints appears curved on the
/// plotting scale; it is still constructed from exactly two evaluations.
pub fn endpoints<T: Float>(
    fit: &LinearFit<T>,
    x_domain: (T, T),
    x_transform: AxisTransform,
    y_transform: AxisTransform,
) -> ((T, T), (T, T)) {
    let (lo, hi) = x_domain;
    (
        (lo, evaluate_at(fit, lo, x_transform, y_transform)),
        (hi, evaluate_at(fit, hi, x_transform, y_transform)),
    )
}
