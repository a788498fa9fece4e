//! Fit summary statistics.
//!
//! ## Purpose
//!
//! This module computes the scalar statistics exposed alongside the
//! regression overlay: the coefficient of determination (R^2) of the fit,
//! and the sample Pearson correlation and sample covariance of the
//! transformed x and y sequences.
//!
//! ## Design notes
//!
//! * **Transformed space**: All statistics are computed over the same
//!   (possibly log-transformed) pairs the regression was fitted to.
//! * **Sample statistics**: Covariance and correlation use the n−1
//!   denominator.
//! * **Degenerate inputs**: Zero-variance sequences yield correlation 0;
//!   R^2 follows the zero-total-variance convention (1 for a residual-free
//!   fit, otherwise 0).
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * R^2 <= 1 (R^2 = 1 is a perfect fit).
//! * Correlation lies in [-1, 1] for non-degenerate inputs.
//! * `covariance(x, x) == variance(x)`.
//!
//! ## Non-goals
//!
//! * This module does not fit the regression (see `algorithms::regression`).
//! * This module does not transform or clean input data.

// External dependencies
use num_traits::Float;
use std::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::regression::LinearFit;

// ============================================================================
// Scalar Statistics
// ============================================================================

/// Compute the sample covariance of two equal-length sequences.
///
/// Uses the n−1 denominator. Sequences shorter than 2 yield zero.
pub fn sample_covariance<T: Float>(x: &[T], y: &[T]) -> T {
    let n = x.len();
    if n < 2 {
        return T::zero();
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

    let mut acc = T::zero();
    for i in 0..n {
        acc = acc + (x[i] - x_mean) * (y[i] - y_mean);
    }

    acc / (n_t - T::one())
}

/// Compute the sample Pearson correlation of two equal-length sequences.
///
/// Zero variance in either sequence yields 0.
pub fn sample_correlation<T: Float>(x: &[T], y: &[T]) -> T {
    let n = x.len();
    if n < 2 {
        return T::zero();
    }

    let cov = sample_covariance(x, y);
    let var_x = sample_covariance(x, x);
    let var_y = sample_covariance(y, y);

    let denom = (var_x * var_y).sqrt();
    if denom <= T::zero() {
        return T::zero();
    }

    cov / denom
}

/// Compute the coefficient of determination (R^2).
/// R^2 = 1 - SS_res / SS_tot, where SS_res is the residual
/// sum of squares and SS_tot is the total sum of squares.
pub fn r_squared<T: Float>(y: &[T], predicted: &[T]) -> T {
    let n = y.len();
    if n == 1 {
        return T::one();
    }

    let n_t = T::from(n).unwrap_or(T::one());

    // Compute mean
    let sum = y.iter().copied().fold(T::zero(), |acc, v| acc + v);
    let mean = sum / n_t;

    // Compute SS_tot and SS_res in one pass
    let (ss_tot, ss_res) =
        y.iter()
            .zip(predicted.iter())
            .fold((T::zero(), T::zero()), |(tot, res), (&yi, &yh)| {
                let deviation = yi - mean;
                let residual = yi - yh;
                (tot + deviation * deviation, res + residual * residual)
            });

    if ss_tot == T::zero() {
        // All y values are identical
        if ss_res == T::zero() {
            T::one() // Perfect fit
        } else {
            T::zero() // No variance to explain
        }
    } else {
        T::one() - ss_res / ss_tot
    }
}

// ============================================================================
// Fit Summary
// ============================================================================

/// The statistics recomputed on every render/redraw pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSummary<T> {
    /// Fitted slope in transformed space.
    pub slope: T,

    /// Fitted intercept in transformed space.
    pub intercept: T,

    /// Coefficient of determination of the fit.
    pub r_squared: T,

    /// Sample Pearson correlation of the transformed pairs.
    pub correlation: T,

    /// Sample covariance of the transformed pairs.
    pub covariance: T,
}

impl<T: Float> FitSummary<T> {
    /// Compute the full summary for a fit over transformed pairs.
    pub fn compute(x: &[T], y: &[T], fit: &LinearFit<T>) -> Self {
        let predicted: Vec<T> = x.iter().map(|&xi| fit.predict(xi)).collect();

        Self {
            slope: fit.slope,
            intercept: fit.intercept,
            r_squared: r_squared(y, &predicted),
            correlation: sample_correlation(x, y),
            covariance: sample_covariance(x, y),
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for FitSummary<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Summary:")?;
        writeln!(f, "  Slope:        {:.6}", self.slope)?;
        writeln!(f, "  Intercept:    {:.6}", self.intercept)?;
        writeln!(f, "  R²:           {:.6}", self.r_squared)?;
        writeln!(f, "  Correlation:  {:.6}", self.correlation)?;
        writeln!(f, "  Covariance:   {:.6}", self.covariance)?;
        Ok(())
    }
}
